//! Cycle detection for sampled signals
//!
//! This crate turns a raw sampled signal into a sequence of half-swing cycles
//! between consecutive local extrema and ranks them by amplitude.
//!
//! # Algorithm
//!
//! 1. Mark every interior sample that is strictly below both neighbours as a
//!    minima and strictly above both as a maxima
//! 2. Collapse the series to its extrema
//! 3. Label each extremum with its own value and back-fill the missing
//!    counterpart from the next extremum of the other kind
//! 4. Pair each extremum with the next one; amplitude is the absolute value change,
//!    duration the absolute time between them. Zero-amplitude swings are dropped
//! 5. Stable-sort by amplitude and take the first `n`
//!
//! Flat peaks and valleys are not extrema. A plateaued signal yields zero cycles.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use signal_core::SeriesTable;
//! use signal_cycles::rank_cycles;
//!
//! let t0 = Utc.timestamp_opt(0, 0).single().unwrap();
//! let table = SeriesTable::from_parts(
//!     "valve",
//!     (0..5).map(|i| t0 + TimeDelta::seconds(i)),
//!     vec![5.0, 3.0, 5.0, 3.0, 5.0],
//! );
//!
//! let cycles = rank_cycles(&table, 2, true).unwrap();
//! assert_eq!(cycles.len(), 2);
//! assert_eq!(cycles[0].amplitude, 2.0);
//! ```

mod extrema;
pub mod detector;
pub mod traits;
pub mod types;

pub use detector::{detect_cycles, rank_cycles, CycleParameters, ExtremaCycleDetector};
pub use traits::{ConfigurableDetector, CycleDetection, CycleDetectorProperties};
pub use types::{Cycle, CycleResult, ExtremumKind};
