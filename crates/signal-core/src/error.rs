//! Error types for state-signal analysis
//!
//! Provides a unified error type for all signal-stats crates.

use thiserror::Error;

/// Core error type for signal analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided by the caller (counts, fractions, population sizes)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input data does not have the required shape or cannot be parsed
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a result count that is not at least one
    pub fn invalid_count(n: usize) -> Self {
        Self::InvalidArgument(format!("Result count must be at least 1, got {n}"))
    }

    /// Create an error for a sample fraction outside (0, 1]
    pub fn invalid_fraction(fraction: f64) -> Self {
        Self::InvalidArgument(format!("Sample fraction {fraction} must be in (0, 1]"))
    }

    /// Create an error for a required column that is absent
    pub fn missing_column(column: &str) -> Self {
        Self::MalformedInput(format!("Required column '{column}' is missing"))
    }

    /// Create an error for a timestamp that cannot be parsed
    pub fn unparseable_timestamp(raw: &str, row: usize) -> Self {
        Self::MalformedInput(format!("Unparseable timestamp '{raw}' at row {row}"))
    }

    /// Whether this error belongs to the `InvalidArgument` class
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Whether this error belongs to the `MalformedInput` class
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}

/// Validate that a requested result count is usable
pub fn check_count(n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::invalid_count(n));
    }
    Ok(())
}

/// Validate that a sample fraction lies in (0, 1]
pub fn check_fraction(fraction: f64) -> Result<()> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(Error::invalid_fraction(fraction));
    }
    Ok(())
}
