//! State-signal analysis toolkit
//!
//! This crate re-exports the workspace crates and adds the end-to-end report that
//! the `signal-report` binary prints:
//!
//! - [`signal_dwell`]: occurrence and dwell-time rankings of state values
//! - [`signal_cycles`]: extrema-based cycle detection ranked by amplitude
//! - [`signal_outlier`]: DTW-based ranking of the most dissimilar series in a
//!   population
//! - [`signal_polars`]: CSV loading, configuration and DataFrame integration

pub use signal_core;
pub use signal_cycles;
pub use signal_dwell;
pub use signal_outlier;
pub use signal_polars;

pub mod report;

pub use report::{run_report, Report};
