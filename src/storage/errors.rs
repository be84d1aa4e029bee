//! # Storage Errors
//!
//! Error types shared by every storage backend.

use thiserror::Error;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by a storage backend.
///
/// The in-memory backend can only fail with `NotFound`; `Database`
/// covers I/O and connection failures from the MySQL backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the requested id
    #[error("user not found")]
    NotFound,

    /// Underlying backend failure
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other.to_string()),
        }
    }
}
