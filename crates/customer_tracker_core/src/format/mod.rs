//! Human-readable rendering of customer records.

pub mod table;
