//! Error types for record operations.

use thiserror::Error;

/// Result type alias for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur during record operations.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Two values under the same key cannot be added together.
    #[error("cannot merge values under key '{key}'")]
    MergeMismatch {
        /// The key whose values clashed.
        key: String,
    },

    /// A bill that is not 25, 50 or 100.
    #[error("unsupported bill: {value}")]
    UnknownBill {
        /// The rejected denomination.
        value: u32,
    },

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
