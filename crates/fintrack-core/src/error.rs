//! Error types for fintrack core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Backing store absent when a read was attempted
    #[error("No ledger found at {}", .0.display())]
    NotFound(PathBuf),

    /// A date string does not match the canonical format
    #[error("Invalid date {0:?}: expected DD-MM-YYYY")]
    InvalidDate(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}
