//! Core domain logic for the HVAC customer tracker.
//! This crate owns the record format, validation, storage and query rules.

pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::TrackerConfig;
pub use format::table::format_table;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::customer::{CustomerField, CustomerInput, CustomerRecord, FIELD_NAMES};
pub use model::validate::{
    count_digits, require_non_blank, validate_phone, FieldValidationError,
    DEFAULT_MIN_PHONE_DIGITS,
};
pub use repo::customer_repo::{
    CsvCustomerRepository, CustomerRepository, ReadOutcome, StoreError, StoreResult,
};
pub use search::substring::search;
pub use service::customer_service::{AddCustomerError, CustomerService, SearchTermError};

/// Builds a CSV-backed service from `config`.
pub fn open_service(config: &TrackerConfig) -> CustomerService<CsvCustomerRepository> {
    CustomerService::new(
        CsvCustomerRepository::new(&config.store_path),
        config.min_phone_digits,
    )
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
