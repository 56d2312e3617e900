//! Error types and result types for storage operations.
//!
//! Use [`StoreResult<T>`] as the return type for fallible storage operations.

use bson::error::Error as BsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when talking to a document store.
///
/// An unconfigured store is not an error; see [`Storage`](crate::store::Storage).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting records to or from BSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during store initialization or connection setup.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// A stored document has an invalid structure or fails record constraints.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
