//! Error types for history storage

use thiserror::Error;

/// Result type for history operations
pub type HistoryResult<T> = std::result::Result<T, HistoryError>;

/// Errors that can occur while managing or persisting history
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Reading or writing the history file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// History could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No entry with the given id
    #[error("History entry not found: {0}")]
    NotFound(String),

    /// Storage location unavailable
    #[error("Storage error: {0}")]
    Storage(String),
}
