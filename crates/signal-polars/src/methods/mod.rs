//! DataFrame implementations of the signal analyses

mod cycles;
mod outliers;
mod ranking;

pub use outliers::{outlier_frame, pair_distance_frame};

use crate::{Error, Result};
use chrono::{DateTime, TimeDelta, Utc};
use signal_dwell::format_duration;

pub(crate) fn duration_nanos(duration: TimeDelta) -> Result<i64> {
    duration.num_nanoseconds().ok_or_else(|| {
        Error::from(signal_core::Error::MalformedInput(format!(
            "Duration {} does not fit in nanoseconds",
            format_duration(duration)
        )))
    })
}

pub(crate) fn timestamp_nanos(timestamp: DateTime<Utc>) -> Result<i64> {
    timestamp.timestamp_nanos_opt().ok_or_else(|| {
        Error::from(signal_core::Error::MalformedInput(format!(
            "Timestamp {timestamp} is outside the nanosecond range"
        )))
    })
}
