//! Error types for the entity model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur constructing or converting entities.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A class tag named no known variant.
    #[error("unknown class {0:?}")]
    UnknownClass(String),

    /// A stored timestamp failed to parse.
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] lodge_types::Error),

    /// A serialized record was structurally invalid.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
