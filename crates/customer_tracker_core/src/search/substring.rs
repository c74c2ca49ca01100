//! Case-insensitive substring search over customer records.
//!
//! # Responsibility
//! - Match a term against all fields of each record.
//!
//! # Invariants
//! - Matching records keep their original relative order.
//! - A blank term matches every record; callers reject blank terms first.

use crate::model::customer::CustomerRecord;

/// Normalizes raw user input into a search needle.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Returns whether `needle` (already normalized) occurs in the record.
///
/// Fields are joined in schema order with single spaces before matching, so
/// a needle may span adjacent fields.
pub fn record_matches(record: &CustomerRecord, needle: &str) -> bool {
    record.values().join(" ").to_lowercase().contains(needle)
}

/// Filters `records` down to those containing `term` in any field.
pub fn search<'a>(records: &'a [CustomerRecord], term: &str) -> Vec<&'a CustomerRecord> {
    let needle = normalize_term(term);
    records
        .iter()
        .filter(|record| record_matches(record, &needle))
        .collect()
}
