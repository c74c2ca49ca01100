//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into use-case level APIs.
//! - Keep the CLI decoupled from storage details.

pub mod customer_service;
