use customer_tracker_core::format::table::column_widths;
use customer_tracker_core::{format_table, CustomerRecord};

fn sample_records() -> Vec<CustomerRecord> {
    vec![
        CustomerRecord::new("Al", "1234567890", "1 A St", ""),
        CustomerRecord::new("Bartholomew", "0987654321", "2 B Ave", "VIP"),
    ]
}

#[test]
fn name_column_grows_to_longest_value() {
    let records = sample_records();
    let widths = column_widths(&records);
    assert_eq!(widths, [11, 10, 7, 5]);

    let table = format_table(&records);
    let lines: Vec<&str> = table.lines().collect();
    assert!(lines[2].starts_with("Al          | "));
    assert!(lines[3].starts_with("Bartholomew | "));
}

#[test]
fn renders_header_divider_and_padded_rows() {
    let table = format_table(&sample_records());
    let expected = [
        "Name        | Phone      | Address | Notes",
        "------------+------------+---------+------",
        "Al          | 1234567890 | 1 A St  |      ",
        "Bartholomew | 0987654321 | 2 B Ave | VIP  ",
    ]
    .join("\n");
    assert_eq!(table, expected);
}

#[test]
fn widths_only_consider_displayed_records() {
    let records = sample_records();
    let only_short = &records[..1];
    let table = format_table(only_short);
    assert!(table.starts_with("Name | Phone      | Address | Notes"));
}

#[test]
fn empty_input_renders_only_header_and_divider() {
    let records: Vec<CustomerRecord> = Vec::new();
    let table = format_table(&records);
    assert_eq!(table, "Name | Phone | Address | Notes\n-----+-------+---------+------");
}
