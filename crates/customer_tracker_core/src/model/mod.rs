//! Customer domain model and field validation.
//!
//! # Responsibility
//! - Define the canonical customer record and column order.
//! - Provide pure validators reusable outside interactive prompts.
//!
//! # Invariants
//! - Every record exposes exactly four fields in schema order.

pub mod customer;
pub mod validate;
