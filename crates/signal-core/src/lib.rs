//! Core types and traits for state-signal analysis
//!
//! This crate provides the pieces every analysis in the workspace shares:
//!
//! - **Data model**: [`Sample`] and [`SeriesTable`], an ordered, named sequence of
//!   timestamped state values
//! - **Errors**: one [`Error`] taxonomy (`InvalidArgument`, `MalformedInput`, ...)
//! - **Grouping**: exact-equality grouping in first-seen order ([`group_and_reduce`])
//! - **Ranking**: stable top-n selection ([`top_n_by`])
//! - **Execution**: sequential and Rayon-backed engines for population-level work
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use signal_core::{group_and_reduce, SeriesTable};
//!
//! let t0 = Utc.timestamp_opt(0, 0).single().unwrap();
//! let table = SeriesTable::from_parts(
//!     "pump_1",
//!     (0..4).map(|i| t0 + chrono::TimeDelta::seconds(i)),
//!     vec![1.0, 2.0, 1.0, 1.0],
//! );
//!
//! let counts = group_and_reduce(table.values().map(|v| (v, ())), || 0usize, |c, _| *c += 1);
//! assert_eq!(counts, vec![(1.0, 3), (2.0, 1)]);
//! ```

pub mod error;
pub mod execution;
pub mod group;
pub mod ranking;
pub mod types;

// Re-export core types
pub use error::{check_count, check_fraction, Error, Result};

pub use execution::{
    auto_engine, sequential, AutoEngine, ExecutionEngine, ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use group::{group_and_reduce, GroupKey};
pub use ranking::{top_n_by, SortOrder};
pub use types::{Sample, SeriesTable};

// Timestamp types used throughout the public API
pub use chrono::{DateTime, TimeDelta, Utc};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{
        group_and_reduce, sequential, top_n_by, ExecutionEngine, ExecutionStrategy, GroupKey,
        Result, Sample, SequentialEngine, SeriesTable, SortOrder,
    };
    pub use chrono::{DateTime, TimeDelta, Utc};
}
