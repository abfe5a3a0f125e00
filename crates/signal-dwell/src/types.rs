//! Result types for value rankings

use chrono::TimeDelta;
use std::fmt;

/// A distinct state value together with the metric it was ranked by
#[derive(Debug, Clone, PartialEq)]
pub struct RankedValue<V, M> {
    /// The state value (group key)
    pub value: V,
    /// The aggregate this value was ranked on
    pub metric: M,
}

impl<V, M> RankedValue<V, M> {
    /// Create a new ranked value
    pub fn new(value: V, metric: M) -> Self {
        Self { value, metric }
    }
}

/// A value ranked by how many samples carry it
pub type OccurrenceRank<V> = RankedValue<V, usize>;

/// A value ranked by the summed dwell time spent in it
pub type DwellRank<V> = RankedValue<V, TimeDelta>;

impl<V: fmt::Display> fmt::Display for RankedValue<V, usize> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>12}  {}", self.value, self.metric)
    }
}

impl<V: fmt::Display> fmt::Display for RankedValue<V, TimeDelta> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>12}  {}", self.value, format_duration(self.metric))
    }
}

/// Render a duration as `[-]D days HH:MM:SS[.ffffff]`
pub fn format_duration(duration: TimeDelta) -> String {
    let sign = if duration < TimeDelta::zero() { "-" } else { "" };
    let duration = duration.abs();

    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;
    let seconds = duration.num_seconds() % 60;
    let micros = duration.subsec_nanos() / 1_000;

    if micros == 0 {
        format!("{sign}{days} days {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{days} days {hours:02}:{minutes:02}:{seconds:02}.{micros:06}")
    }
}
