//! Customer record domain model.
//!
//! # Responsibility
//! - Define the canonical customer record and its fixed column order.
//! - Build validated records from raw, user-supplied input.
//!
//! # Invariants
//! - Column order is always `Name, Phone, Address, Notes`.
//! - A `CustomerRecord` built through `from_input` has a non-blank name and
//!   address and a phone with enough digits.
//! - Records carry no identifier; duplicates are allowed.

use crate::model::validate::{require_non_blank, validate_phone, FieldValidationError};
use serde::Serialize;

/// Header labels in canonical storage and display order.
pub const FIELD_NAMES: [&str; 4] = ["Name", "Phone", "Address", "Notes"];

/// One column of the customer schema.
///
/// Discriminants follow schema order and index `FIELD_NAMES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Name,
    Phone,
    Address,
    Notes,
}

impl CustomerField {
    /// All fields in canonical order.
    pub const ALL: [CustomerField; 4] = [
        CustomerField::Name,
        CustomerField::Phone,
        CustomerField::Address,
        CustomerField::Notes,
    ];

    /// Header label used in the backing store and rendered tables.
    pub fn header(self) -> &'static str {
        FIELD_NAMES[self as usize]
    }
}

/// Canonical customer contact record.
///
/// Serialized with the header labels as field names so the CSV encoding
/// follows the schema order of this struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerRecord {
    #[serde(rename = "Name")]
    pub name: String,
    /// Stored as entered, formatting preserved.
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Address")]
    pub address: String,
    /// Optional; empty when not supplied.
    #[serde(rename = "Notes")]
    pub notes: String,
}

/// Raw, unvalidated field values for a new customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInput {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
}

impl CustomerRecord {
    /// Creates a record from already-clean values without validation.
    ///
    /// Used by storage read paths and tests; user input goes through
    /// [`CustomerRecord::from_input`].
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            notes: notes.into(),
        }
    }

    /// Validates raw input and builds a record from the cleaned values.
    ///
    /// # Errors
    /// - `FieldValidationError::Blank` when name or address is blank.
    /// - `FieldValidationError::InvalidPhone` when the phone has fewer than
    ///   `min_phone_digits` digits.
    pub fn from_input(
        input: &CustomerInput,
        min_phone_digits: usize,
    ) -> Result<Self, FieldValidationError> {
        Ok(Self {
            name: require_non_blank(&input.name)?,
            phone: validate_phone(&input.phone, min_phone_digits)?,
            address: require_non_blank(&input.address)?,
            notes: input.notes.trim().to_string(),
        })
    }

    /// Returns the value stored for `field`.
    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Phone => &self.phone,
            CustomerField::Address => &self.address,
            CustomerField::Notes => &self.notes,
        }
    }

    /// Returns all values in canonical order.
    pub fn values(&self) -> [&str; 4] {
        CustomerField::ALL.map(|field| self.get(field))
    }
}
