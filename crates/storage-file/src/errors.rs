//! Conversion of filesystem and serialization errors into the
//! storage-agnostic core error types.

use worthai_core::errors::{Error, StorageError};

/// An unreadable or unwritable slot.
pub fn unavailable(err: impl std::fmt::Display) -> Error {
    Error::Storage(StorageError::Unavailable(err.to_string()))
}

/// A slot whose contents could not be decoded.
pub fn corrupt(err: impl std::fmt::Display) -> Error {
    Error::Storage(StorageError::Corrupt(err.to_string()))
}
