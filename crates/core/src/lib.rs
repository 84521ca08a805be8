//! WorthAI Core - Estimate lifecycle and derived statistics.
//!
//! This crate contains the business rules for turning an accepted price
//! analysis into a persisted history record, resolving records with an
//! actual sale/purchase price, and folding the history into summary and
//! accuracy statistics. It is storage-agnostic and defines the repository
//! trait implemented by the `storage-file` crate.

pub mod analytics;
pub mod constants;
pub mod errors;
pub mod history;
pub mod money;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
