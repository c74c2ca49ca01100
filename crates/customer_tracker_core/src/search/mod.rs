//! Record search entry points.
//!
//! # Responsibility
//! - Expose in-memory query APIs over loaded customer records.

pub mod substring;
