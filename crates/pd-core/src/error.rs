//! Error types for PrimeDigit

use thiserror::Error;

/// PrimeDigit error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Parse error in a line-oriented input file
    #[error("Parse error at line {line}: {msg}")]
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// What went wrong
        msg: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
