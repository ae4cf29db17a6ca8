//! Storage boundary error types.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Faults raised by the storage client.
///
/// These never cross the store boundary: the singleton store catches
/// them and degrades to absent data or a failed-write flag.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The storage handle or connection is unavailable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed an operation.
    #[error("backend operation failed: {0}")]
    Backend(String),

    /// A document could not be (de)serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
