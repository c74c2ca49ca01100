//! Explicit runtime configuration for core components.
//!
//! # Responsibility
//! - Carry the store location and validation thresholds into constructors.
//!
//! # Invariants
//! - No component reads global paths; everything flows from `TrackerConfig`.

use crate::model::validate::DEFAULT_MIN_PHONE_DIGITS;
use std::path::{Path, PathBuf};

/// Default backing store file name.
pub const DEFAULT_STORE_FILE: &str = "customers.csv";

/// Store location and field rules used by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Path of the CSV backing store.
    pub store_path: PathBuf,
    /// Minimum digit characters a phone number must contain.
    pub min_phone_digits: usize,
}

impl TrackerConfig {
    /// Creates a config for `store_path` with default field rules.
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            min_phone_digits: DEFAULT_MIN_PHONE_DIGITS,
        }
    }

    /// Places the default store file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_STORE_FILE))
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}
