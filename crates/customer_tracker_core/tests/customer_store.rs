use customer_tracker_core::{
    CsvCustomerRepository, CustomerRecord, CustomerRepository, StoreError, FIELD_NAMES,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LINE: &str = if cfg!(windows) { "\r\n" } else { "\n" };

fn repo_in(dir: &TempDir) -> CsvCustomerRepository {
    CsvCustomerRepository::new(dir.path().join("customers.csv"))
}

fn first_line(path: &Path) -> String {
    let content = fs::read_to_string(path).unwrap();
    content.lines().next().unwrap_or_default().to_string()
}

#[test]
fn ensure_store_creates_header_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);

    repo.ensure_store().unwrap();

    let content = fs::read_to_string(repo.path()).unwrap();
    assert_eq!(content, format!("Name,Phone,Address,Notes{LINE}"));
}

#[test]
fn ensure_store_rewrites_empty_file_and_keeps_existing_data() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    fs::write(repo.path(), "").unwrap();

    repo.ensure_store().unwrap();
    assert_eq!(first_line(repo.path()), FIELD_NAMES.join(","));

    repo.append(&CustomerRecord::new("Al", "1234567890", "1 A St", ""))
        .unwrap();
    repo.ensure_store().unwrap();
    assert_eq!(repo.read_all().records.len(), 1);
}

#[test]
fn fresh_store_reads_as_empty_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);

    let outcome = repo.read_all();
    assert!(outcome.is_empty());
    assert!(outcome.error.is_none());
    assert!(repo.path().is_file());
}

#[test]
fn appended_records_round_trip_with_quoting() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    let plain = CustomerRecord::new("Al", "1234567890", "1 A St", "");
    let tricky = CustomerRecord::new(
        "Doe, Jane",
        "(555) 123-4567",
        "12 \"Oak\" Ave",
        "line one\nline two",
    );

    repo.append(&plain).unwrap();
    repo.append(&tricky).unwrap();

    let outcome = repo.read_all();
    assert!(outcome.error.is_none());
    assert_eq!(outcome.records, vec![plain, tricky]);

    let content = fs::read_to_string(repo.path()).unwrap();
    assert!(content.contains("\"Doe, Jane\""));
    assert!(content.contains("\"12 \"\"Oak\"\" Ave\""));
    assert_eq!(first_line(repo.path()), "Name,Phone,Address,Notes");
}

#[test]
fn append_writes_one_line_in_schema_order() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);

    repo.append(&CustomerRecord::new("Bo", "555-123-4567", "2 B Ave", "VIP"))
        .unwrap();

    let content = fs::read_to_string(repo.path()).unwrap();
    assert_eq!(
        content,
        format!("Name,Phone,Address,Notes{LINE}Bo,555-123-4567,2 B Ave,VIP{LINE}")
    );
}

#[test]
fn duplicate_records_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    let record = CustomerRecord::new("Al", "1234567890", "1 A St", "");

    repo.append(&record).unwrap();
    repo.append(&record).unwrap();

    assert_eq!(repo.read_all().records, vec![record.clone(), record]);
}

#[test]
fn consecutive_reads_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    repo.append(&CustomerRecord::new("Al", "1234567890", "1 A St", ""))
        .unwrap();
    repo.append(&CustomerRecord::new("Bo", "0987654321", "2 B Ave", "VIP"))
        .unwrap();

    let first = repo.load_all().unwrap();
    let second = repo.load_all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn columns_are_mapped_by_header_name() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    fs::write(
        repo.path(),
        "Phone,Name,Notes,Address,Extra\n5551234567,Al,VIP,1 A St,ignored\n",
    )
    .unwrap();

    let records = repo.load_all().unwrap();
    assert_eq!(
        records,
        vec![CustomerRecord::new("Al", "5551234567", "1 A St", "VIP")]
    );
}

#[test]
fn short_rows_default_missing_fields_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    fs::write(repo.path(), "Name,Phone,Address,Notes\nAl,5551234567\n").unwrap();

    let records = repo.load_all().unwrap();
    assert_eq!(records, vec![CustomerRecord::new("Al", "5551234567", "", "")]);
}

#[test]
fn reader_accepts_crlf_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    fs::write(
        repo.path(),
        "Name,Phone,Address,Notes\r\nAl,1234567890,1 A St,\r\nBo,0987654321,2 B Ave,VIP\r\n",
    )
    .unwrap();

    let records = repo.load_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].notes, "");
    assert_eq!(records[1].notes, "VIP");
}

#[test]
fn append_starts_new_line_when_file_lacks_terminator() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    fs::write(repo.path(), "Name,Phone,Address,Notes\nAl,1234567890,1 A St,VIP").unwrap();

    repo.append(&CustomerRecord::new("Bo", "0987654321", "2 B Ave", ""))
        .unwrap();

    let records = repo.load_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].notes, "VIP");
    assert_eq!(records[1].name, "Bo");
}

#[test]
fn malformed_file_yields_no_partial_records() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(&dir);
    let mut bytes = b"Name,Phone,Address,Notes\nAl,1234567890,1 A St,\n".to_vec();
    bytes.extend_from_slice(b"B\xffo,0987654321,2 B Ave,\n");
    fs::write(repo.path(), bytes).unwrap();

    let outcome = repo.read_all();
    assert!(outcome.records.is_empty());
    let err = outcome.error.unwrap();
    assert!(matches!(err, StoreError::Read { .. }));
    assert!(err.to_string().starts_with("Could not read customers: "));
}

#[test]
fn unreadable_store_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store_dir = dir.path().join("customers.csv");
    fs::create_dir(&store_dir).unwrap();
    fs::write(store_dir.join("placeholder"), "x").unwrap();
    let repo = CsvCustomerRepository::new(&store_dir);

    let outcome = repo.read_all();
    assert!(outcome.records.is_empty());
    assert!(matches!(outcome.error, Some(StoreError::Read { .. })));

    let err = repo
        .append(&CustomerRecord::new("Al", "1234567890", "1 A St", ""))
        .unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert!(err.to_string().starts_with("Failed to save customer: "));
}

#[test]
fn missing_parent_directory_is_a_prepare_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("customers.csv");
    let repo = CsvCustomerRepository::new(&path);

    let err = repo.ensure_store().unwrap_err();
    assert!(matches!(err, StoreError::Prepare { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err
        .to_string()
        .starts_with("Unable to prepare customer storage: "));

    let outcome = repo.read_all();
    assert!(outcome.records.is_empty());
    assert!(matches!(outcome.error, Some(StoreError::Prepare { .. })));

    let write_err = repo
        .append(&CustomerRecord::new("Al", "1234567890", "1 A St", ""))
        .unwrap_err();
    assert!(matches!(write_err, StoreError::Prepare { .. }));
}
