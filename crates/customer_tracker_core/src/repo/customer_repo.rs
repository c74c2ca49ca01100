//! Customer repository contract and CSV file implementation.
//!
//! # Responsibility
//! - Keep the backing file initialized with the canonical header.
//! - Load all records, mapping columns by header name.
//! - Append one record per line using the same CSV encoding.
//!
//! # Invariants
//! - The first line of the backing file is always `Name,Phone,Address,Notes`.
//! - The file is opened and closed within each operation; writes are flushed
//!   before returning.
//! - Read failures yield no records rather than partial data.

use crate::model::customer::{CustomerField, CustomerRecord, FIELD_NAMES};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const LINE_TERMINATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer failure, tagged with the operation that hit it.
#[derive(Debug)]
pub enum StoreError {
    /// Backing file could not be created or given its header.
    Prepare { path: PathBuf, source: csv::Error },
    /// Backing file could not be opened or parsed.
    Read { path: PathBuf, source: csv::Error },
    /// A record could not be appended.
    Write { path: PathBuf, source: csv::Error },
}

impl StoreError {
    /// Path of the backing file involved in the failure.
    pub fn path(&self) -> &Path {
        match self {
            Self::Prepare { path, .. } | Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prepare { source, .. } => {
                write!(f, "Unable to prepare customer storage: {source}")
            }
            Self::Read { source, .. } => write!(f, "Could not read customers: {source}"),
            Self::Write { source, .. } => write!(f, "Failed to save customer: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prepare { source, .. } | Self::Read { source, .. } | Self::Write { source, .. } => {
                Some(source)
            }
        }
    }
}

/// Result of a non-failing read: records, or none plus the diagnostic.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub records: Vec<CustomerRecord>,
    /// Set when the store could not be prepared or read; `records` is then empty.
    pub error: Option<StoreError>,
}

impl ReadOutcome {
    pub fn loaded(records: Vec<CustomerRecord>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    pub fn failed(error: StoreError) -> Self {
        Self {
            records: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Repository interface for customer persistence.
pub trait CustomerRepository {
    /// Creates the store with only the header when it is missing or empty.
    fn ensure_store(&self) -> StoreResult<()>;
    /// Loads every record; failures degrade to an empty outcome.
    fn read_all(&self) -> ReadOutcome;
    /// Appends one record. Duplicates are not checked.
    fn append(&self, record: &CustomerRecord) -> StoreResult<()>;
}

/// CSV file-backed customer repository.
#[derive(Debug, Clone)]
pub struct CsvCustomerRepository {
    path: PathBuf,
}

impl CsvCustomerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read: loads every record or returns the failure.
    ///
    /// # Errors
    /// - `StoreError::Prepare` when the store cannot be initialized.
    /// - `StoreError::Read` when the file cannot be opened or parsed.
    pub fn load_all(&self) -> StoreResult<Vec<CustomerRecord>> {
        self.ensure_store()?;

        let started_at = Instant::now();
        match parse_records(&self.path) {
            Ok(records) => {
                info!(
                    "event=store_read module=store status=ok records={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records)
            }
            Err(source) => {
                error!(
                    "event=store_read module=store status=error duration_ms={} error_code=read_failed error={}",
                    started_at.elapsed().as_millis(),
                    source
                );
                Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }
}

impl CustomerRepository for CsvCustomerRepository {
    fn ensure_store(&self) -> StoreResult<()> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };
        if !needs_header {
            return Ok(());
        }

        match write_header(&self.path) {
            Ok(()) => {
                info!("event=store_init module=store status=ok");
                Ok(())
            }
            Err(source) => {
                error!(
                    "event=store_init module=store status=error error_code=prepare_failed error={}",
                    source
                );
                Err(StoreError::Prepare {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    fn read_all(&self) -> ReadOutcome {
        match self.load_all() {
            Ok(records) => ReadOutcome::loaded(records),
            Err(err) => ReadOutcome::failed(err),
        }
    }

    fn append(&self, record: &CustomerRecord) -> StoreResult<()> {
        self.ensure_store()?;

        let started_at = Instant::now();
        match append_record(&self.path, record) {
            Ok(()) => {
                info!(
                    "event=store_append module=store status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(source) => {
                error!(
                    "event=store_append module=store status=error duration_ms={} error_code=write_failed error={}",
                    started_at.elapsed().as_millis(),
                    source
                );
                Err(StoreError::Write {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }
}

/// Positions of the schema columns within a file's header row.
struct ColumnMap {
    positions: [Option<usize>; 4],
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let positions = CustomerField::ALL.map(|field| {
            // Last occurrence wins when a header name is repeated.
            headers
                .iter()
                .enumerate()
                .filter(|(_, name)| *name == field.header())
                .map(|(idx, _)| idx)
                .last()
        });
        Self { positions }
    }

    fn is_complete(&self) -> bool {
        self.positions.iter().all(Option::is_some)
    }

    fn value<'r>(&self, row: &'r csv::StringRecord, field: CustomerField) -> &'r str {
        self.positions[field as usize]
            .and_then(|idx| row.get(idx))
            .unwrap_or("")
    }

    fn record_from(&self, row: &csv::StringRecord) -> CustomerRecord {
        CustomerRecord::new(
            self.value(row, CustomerField::Name),
            self.value(row, CustomerField::Phone),
            self.value(row, CustomerField::Address),
            self.value(row, CustomerField::Notes),
        )
    }
}

fn writer_builder() -> csv::WriterBuilder {
    let terminator = if cfg!(windows) {
        csv::Terminator::CRLF
    } else {
        csv::Terminator::Any(b'\n')
    };
    let mut builder = csv::WriterBuilder::new();
    builder.has_headers(false).terminator(terminator);
    builder
}

fn write_header(path: &Path) -> csv::Result<()> {
    let file = File::create(path)?;
    let mut writer = writer_builder().from_writer(file);
    writer.write_record(FIELD_NAMES)?;
    writer.flush()?;
    Ok(())
}

fn parse_records(path: &Path) -> csv::Result<Vec<CustomerRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let columns = ColumnMap::from_headers(reader.headers()?);
    if !columns.is_complete() {
        warn!("event=store_read module=store status=warn detail=header_missing_columns");
    }

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(columns.record_from(&row?));
    }
    Ok(records)
}

fn append_record(path: &Path, record: &CustomerRecord) -> csv::Result<()> {
    let mut file = OpenOptions::new().read(true).append(true).open(path)?;
    if ends_without_terminator(&mut file)? {
        file.write_all(LINE_TERMINATOR.as_bytes())?;
    }

    let mut writer = writer_builder().from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}

fn ends_without_terminator(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0_u8; 1];
    file.read_exact(&mut last)?;
    Ok(!matches!(last[0], b'\n' | b'\r'))
}
