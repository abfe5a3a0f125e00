//! Sample and series types shared by every analysis

use chrono::{DateTime, Utc};
use std::fmt;

/// A single observation: a state value recorded at a UTC instant
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<V> {
    /// When the value was recorded
    pub timestamp: DateTime<Utc>,
    /// The recorded state value
    pub value: V,
}

impl<V> Sample<V> {
    /// Create a new sample
    pub fn new(timestamp: DateTime<Utc>, value: V) -> Self {
        Self { timestamp, value }
    }
}

/// A named, ordered sequence of samples from one source
///
/// Samples keep the order in which they were read. Timestamps are expected to be
/// non-decreasing; equal timestamps are allowed. Analyses only ever borrow a table
/// and produce new derived structures.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable<V> {
    name: String,
    samples: Vec<Sample<V>>,
}

impl<V> SeriesTable<V> {
    /// Create a table from already-ordered samples
    pub fn new(name: impl Into<String>, samples: Vec<Sample<V>>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    /// Build a table from parallel timestamp and value sequences
    pub fn from_parts<I, J>(name: impl Into<String>, timestamps: I, values: J) -> Self
    where
        I: IntoIterator<Item = DateTime<Utc>>,
        J: IntoIterator<Item = V>,
    {
        let samples = timestamps
            .into_iter()
            .zip(values)
            .map(|(timestamp, value)| Sample::new(timestamp, value))
            .collect();
        Self::new(name, samples)
    }

    /// Name of the source this table was read from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All samples in read order
    pub fn samples(&self) -> &[Sample<V>] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the table holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over values in read order
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.samples.iter().map(|s| &s.value)
    }

    /// Iterate over timestamps in read order
    pub fn timestamps(&self) -> impl ExactSizeIterator<Item = DateTime<Utc>> + '_ {
        self.samples.iter().map(|s| s.timestamp)
    }

    /// Whether timestamps never decrease
    pub fn is_time_ordered(&self) -> bool {
        self.samples
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp)
    }
}

impl<V: fmt::Display> fmt::Display for SeriesTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SeriesTable '{}' ({} samples)", self.name, self.len())?;
        for sample in self.samples.iter().take(5) {
            writeln!(f, "  {}  {}", sample.timestamp.to_rfc3339(), sample.value)?;
        }
        if self.len() > 5 {
            writeln!(f, "  ...")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn test_from_parts_zips_in_order() {
        let table = SeriesTable::from_parts("s", vec![ts(0), ts(1), ts(2)], vec![5.0, 3.0, 5.0]);
        assert_eq!(table.name(), "s");
        assert_eq!(table.len(), 3);
        assert_eq!(table.values().copied().collect::<Vec<_>>(), vec![5.0, 3.0, 5.0]);
        assert_eq!(table.samples()[1].timestamp, ts(1));
    }

    #[test]
    fn test_time_ordering() {
        let ordered = SeriesTable::from_parts("a", vec![ts(0), ts(0), ts(3)], vec![1, 2, 3]);
        assert!(ordered.is_time_ordered());

        let unordered = SeriesTable::from_parts("b", vec![ts(2), ts(1)], vec![1, 2]);
        assert!(!unordered.is_time_ordered());
    }

    #[test]
    fn test_empty_table() {
        let table: SeriesTable<f64> = SeriesTable::new("empty", Vec::new());
        assert!(table.is_empty());
        assert!(table.is_time_ordered());
    }

    #[test]
    fn test_display_truncates() {
        let table = SeriesTable::from_parts("long", (0..10).map(ts), 0..10);
        let shown = table.to_string();
        assert!(shown.contains("'long' (10 samples)"));
        assert!(shown.contains("..."));
    }
}
