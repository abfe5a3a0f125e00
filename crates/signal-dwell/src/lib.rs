//! Dwell-time annotation and value rankings for state signals
//!
//! A state signal records which value a source is in and when it entered it. This
//! crate answers two questions about a single series:
//!
//! - **Occurrence**: which values are recorded least/most often
//!   ([`rank_by_occurrence`])
//! - **Dwell**: which values the series spends the least/most cumulative time in
//!   ([`rank_by_dwell_time`]), built on per-sample dwell times from
//!   [`annotate_dwell`]
//!
//! Grouping uses exact equality on the raw value. Quantize continuous signals before
//! ranking them if approximate grouping is wanted.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use signal_core::SeriesTable;
//! use signal_dwell::{rank_by_dwell_time, rank_by_occurrence};
//!
//! let t0 = Utc.timestamp_opt(0, 0).single().unwrap();
//! let table = SeriesTable::from_parts(
//!     "door",
//!     vec![t0, t0 + TimeDelta::seconds(2), t0 + TimeDelta::seconds(5)],
//!     vec!["open", "open", "closed"],
//! );
//!
//! let least_common = rank_by_occurrence(&table, 1, true).unwrap();
//! assert_eq!(least_common[0].value, "closed");
//!
//! let longest = rank_by_dwell_time(&table, 1, false).unwrap();
//! assert_eq!(longest[0].metric, TimeDelta::seconds(5));
//! ```

pub mod annotator;
pub mod rank;
pub mod types;

pub use annotator::{annotate_dwell, total_dwell, DwellRecord};
pub use rank::{occurrence_counts, rank_by_dwell_time, rank_by_occurrence, total_dwell_by_value};
pub use types::{format_duration, DwellRank, OccurrenceRank, RankedValue};
