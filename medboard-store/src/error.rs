//! Error types for the collection layer.

use medboard_types::RecordId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when mutating a collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Insert collision. The caller must allocate a fresh identifier and
    /// retry; existing records are never overwritten.
    #[error("duplicate identifier: {0}")]
    DuplicateId(RecordId),

    /// Update/delete target missing from its collection, e.g. the UI raced
    /// a stale identifier.
    #[error("record not found: {0}")]
    NotFound(RecordId),
}
