//! Pure field validators for user-supplied values.
//!
//! Interactive re-prompting is the caller's concern; these functions only
//! accept or reject one raw value.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

// `\d` is Unicode-aware: any decimal digit character counts.
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit regex"));

/// Default minimum number of digits in a phone number.
pub const DEFAULT_MIN_PHONE_DIGITS: usize = 10;

/// Validation failure for a single user-supplied field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    /// Value is empty after trimming surrounding whitespace.
    Blank,
    /// Phone has fewer digit characters than required.
    InvalidPhone { min_digits: usize, found: usize },
}

impl Display for FieldValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "This field cannot be blank. Please try again."),
            Self::InvalidPhone { min_digits, .. } => write!(
                f,
                "Phone number must include at least {min_digits} digits. Try again."
            ),
        }
    }
}

impl Error for FieldValidationError {}

/// Trims `raw` and rejects an empty result.
pub fn require_non_blank(raw: &str) -> Result<String, FieldValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldValidationError::Blank);
    }
    Ok(value.to_string())
}

/// Counts decimal digit characters in `raw`, ignoring everything else.
pub fn count_digits(raw: &str) -> usize {
    DIGIT_RE.find_iter(raw).count()
}

/// Accepts a phone number with at least `min_digits` digits.
///
/// Punctuation, spaces and `+` prefixes are ignored for counting and kept in
/// the returned value; only surrounding whitespace is trimmed.
pub fn validate_phone(raw: &str, min_digits: usize) -> Result<String, FieldValidationError> {
    let value = raw.trim();
    let found = count_digits(value);
    if found < min_digits {
        return Err(FieldValidationError::InvalidPhone { min_digits, found });
    }
    Ok(value.to_string())
}
