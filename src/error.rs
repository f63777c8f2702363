//! Error types for ShelfDB
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Unified error type for ShelfDB operations
#[derive(Debug, Error)]
pub enum ShelfError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The console reached end of input
    #[error("Input closed")]
    InputClosed,

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt data in {}: {reason}", path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The highest stored id is u64::MAX; no next id exists
    #[error("Id space exhausted: highest id is {0}")]
    IdSpaceExhausted(u64),

    // -------------------------------------------------------------------------
    // User Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid search criteria '{0}': expected title, author or year")]
    InvalidCriteria(String),

    #[error("Invalid status '{0}': expected 'available' or 'issued'")]
    InvalidStatus(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShelfError {
    /// True for errors caused by what the operator typed
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ShelfError::InvalidInput(_)
                | ShelfError::InvalidCriteria(_)
                | ShelfError::InvalidStatus(_)
        )
    }
}
