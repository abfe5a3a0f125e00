//! Polars integration for signal analysis
//!
//! This crate is the data-facing layer of the workspace:
//!
//! - **Loading**: read CSV tables into [`SeriesTable`](signal_core::SeriesTable)s,
//!   one file or a whole population directory at a time
//! - **Configuration**: column names and JSON report configuration
//! - **DataFrame analyses**: the [`SignalStatsExt`] extension trait runs the
//!   per-series rankings directly on a `DataFrame`
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use signal_polars::{ColumnNames, SignalStatsExt};
//!
//! let df = df![
//!     "timestamp_utc" => ["2024-01-01 00:00:00", "2024-01-01 00:00:02", "2024-01-01 00:00:05"],
//!     "sig_value" => ["open", "open", "closed"],
//! ]?;
//!
//! let ranking = df.dwell_ranking("valve", &ColumnNames::default(), 2, false)?;
//! ```

mod config;
mod error;
mod loader;
mod methods;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use loader::{
    extract_timestamps, load_population, load_series, parse_timestamp, read_table,
    series_table_from_frame, ColumnValue,
};
pub use methods::{outlier_frame, pair_distance_frame};
pub use traits::*;
