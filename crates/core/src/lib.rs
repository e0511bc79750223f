//! Domain types shared by the persistence and HTTP layers.
//!
//! This crate has no I/O: it holds the error taxonomy, the id/timestamp
//! aliases, input validation helpers and the join-result aggregator.

pub mod aggregate;
pub mod error;
pub mod types;
pub mod validation;
