//! Customer use-case service.
//!
//! # Responsibility
//! - Provide add/list/search entry points for the CLI.
//! - Validate input before it reaches the repository.
//!
//! # Invariants
//! - Only validated records are appended.
//! - Blank search terms are rejected before the store is read.
//! - Search results keep store order; "no match" and "empty store" are not
//!   distinguished.

use crate::model::customer::{CustomerInput, CustomerRecord};
use crate::model::validate::FieldValidationError;
use crate::repo::customer_repo::{CustomerRepository, ReadOutcome, StoreError};
use crate::search::substring::{normalize_term, record_matches};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to add a customer.
#[derive(Debug)]
pub enum AddCustomerError {
    /// Input rejected; nothing was written.
    Validation(FieldValidationError),
    /// Input was valid but the record was not persisted.
    Store(StoreError),
}

impl Display for AddCustomerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AddCustomerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<FieldValidationError> for AddCustomerError {
    fn from(value: FieldValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for AddCustomerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Search term rejected before querying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTermError {
    Blank,
}

impl Display for SearchTermError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "Search term cannot be empty."),
        }
    }
}

impl Error for SearchTermError {}

/// Customer service facade over repository implementations.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
    min_phone_digits: usize,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service using the provided repository and phone rule.
    pub fn new(repo: R, min_phone_digits: usize) -> Self {
        Self {
            repo,
            min_phone_digits,
        }
    }

    pub fn min_phone_digits(&self) -> usize {
        self.min_phone_digits
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Validates `input` and appends it to the store.
    ///
    /// Returns the record as persisted.
    pub fn add_customer(&self, input: &CustomerInput) -> Result<CustomerRecord, AddCustomerError> {
        let record = match CustomerRecord::from_input(input, self.min_phone_digits) {
            Ok(record) => record,
            Err(err) => {
                debug!("event=customer_add module=service status=rejected reason={err:?}");
                return Err(err.into());
            }
        };

        self.repo.append(&record)?;
        info!("event=customer_add module=service status=ok");
        Ok(record)
    }

    /// Loads every customer in store order.
    pub fn list_customers(&self) -> ReadOutcome {
        self.repo.read_all()
    }

    /// Returns customers whose fields contain `term`, case-insensitively.
    ///
    /// # Errors
    /// - `SearchTermError::Blank` when `term` is blank after trimming.
    pub fn search_customers(&self, term: &str) -> Result<ReadOutcome, SearchTermError> {
        let needle = normalize_term(term);
        if needle.is_empty() {
            warn!("event=customer_search module=service status=rejected reason=blank_term");
            return Err(SearchTermError::Blank);
        }

        let mut outcome = self.repo.read_all();
        let scanned = outcome.records.len();
        outcome.records.retain(|record| record_matches(record, &needle));
        info!(
            "event=customer_search module=service status=ok scanned={} matched={}",
            scanned,
            outcome.records.len()
        );
        Ok(outcome)
    }
}
