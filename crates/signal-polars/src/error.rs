//! Error types for signal-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("{0}")]
    Core(#[from] signal_core::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Type mismatch in column '{column}': expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: String,
        got: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Whether the input data itself is unusable
    ///
    /// Missing columns, wrongly typed columns, unparseable timestamps, non-numeric
    /// values and empty series all fall in this class.
    pub fn is_malformed_input(&self) -> bool {
        match self {
            Self::InvalidColumn(_) | Self::TypeMismatch { .. } => true,
            Self::Core(e) => e.is_malformed_input(),
            _ => false,
        }
    }

    /// Whether a caller-supplied argument was out of range
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_invalid_argument())
    }
}
