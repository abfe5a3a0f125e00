//! Outlier ranking for populations of sampled signals
//!
//! Given a population of series recorded from similar sources, find the series
//! that behave least like the others. Every series is subsampled, every pair is
//! compared with Dynamic Time Warping, and each series is scored by the sum of its
//! distances to all other series.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use signal_core::SeriesTable;
//! use signal_outlier::rank_outlier_series_seeded;
//!
//! let t0 = Utc.timestamp_opt(0, 0).single().unwrap();
//! let make = |name: &str, values: Vec<f64>| {
//!     SeriesTable::from_parts(name, (0..values.len() as i64).map(|i| t0 + TimeDelta::seconds(i)), values)
//! };
//!
//! let population = vec![
//!     make("a", vec![0.0, 1.0, 0.0, 1.0]),
//!     make("b", vec![0.0, 1.0, 0.0, 1.0]),
//!     make("odd", vec![9.0, 9.0, 9.0, 9.0]),
//! ];
//!
//! let outliers = rank_outlier_series_seeded(&population, 1, 1.0, 42).unwrap();
//! assert_eq!(outliers, vec!["odd".to_string()]);
//! ```
//!
//! See [`matrix`] for the cost of a run.

pub mod dtw;
pub mod matrix;
pub mod subsample;
pub mod types;

pub use dtw::{dtw_distance, dtw_distance_unpruned, upper_bound_cost, Dtw};
pub use matrix::{
    rank_outlier_series, rank_outlier_series_seeded, unordered_pairs, DistanceMatrixBuilder,
    OutlierParameters, DEFAULT_SAMPLE_FRACTION,
};
pub use subsample::{subsample_size, Subsampler};
pub use types::{accumulate_totals, OutlierRanking, PairDistance, SeriesScore};
