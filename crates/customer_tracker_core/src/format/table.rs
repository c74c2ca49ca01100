//! Aligned text table rendering for customer records.

use crate::model::customer::{CustomerField, CustomerRecord};
use std::borrow::Borrow;

const COLUMN_SEPARATOR: &str = " | ";
const DIVIDER_JOINT: &str = "-+-";

/// Renders `records` as a header row, a dash divider and one row per record.
///
/// Column widths are the larger of the header label and the longest value
/// among `records` only, counted in characters. Every cell is left-justified
/// and padded, including the last column. Lines are joined with `\n` and no
/// trailing newline is added.
///
/// Callers should show a "no records" message instead of an empty table.
pub fn format_table<R: Borrow<CustomerRecord>>(records: &[R]) -> String {
    let widths = column_widths(records);

    let header = build_line(CustomerField::ALL.map(CustomerField::header), &widths);
    let divider = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join(DIVIDER_JOINT);

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(header);
    lines.push(divider);
    for record in records {
        let record: &CustomerRecord = record.borrow();
        lines.push(build_line(record.values(), &widths));
    }
    lines.join("\n")
}

/// Returns per-column widths in schema order.
pub fn column_widths<R: Borrow<CustomerRecord>>(records: &[R]) -> [usize; 4] {
    let mut widths = CustomerField::ALL.map(|field| field.header().chars().count());
    for record in records {
        let record: &CustomerRecord = record.borrow();
        for (width, value) in widths.iter_mut().zip(record.values()) {
            *width = (*width).max(value.chars().count());
        }
    }
    widths
}

fn build_line(parts: [&str; 4], widths: &[usize; 4]) -> String {
    parts
        .iter()
        .zip(widths)
        .map(|(part, &width)| format!("{part:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}
