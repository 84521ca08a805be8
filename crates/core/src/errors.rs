//! Core error types for the WorthAI application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (filesystem, serialization) are converted to these types by the storage
//! layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the estimate engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Storage-agnostic error type for the persistence collaborator.
///
/// The collaborator is a single named slot holding the whole serialized
/// record collection; there is no partial-record access, so every failure
/// is a whole-slot failure.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The slot could not be read or written.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The slot contents could not be decoded as a record collection.
    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Price must be a positive number, got '{0}'")]
    InvalidPrice(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
