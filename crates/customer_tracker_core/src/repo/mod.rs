//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the customer persistence contract.
//! - Isolate CSV file details from service orchestration.
//!
//! # Invariants
//! - Every read and write first guarantees the store header exists.
//! - Storage failures are returned as `StoreError`, never as panics.

pub mod customer_repo;
