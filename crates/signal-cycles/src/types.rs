//! Types used for cycle detection

use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Kind of a strict local extremum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    /// Strictly lower than both neighbours
    Minima,
    /// Strictly higher than both neighbours
    Maxima,
}

impl fmt::Display for ExtremumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtremumKind::Minima => write!(f, "minima"),
            ExtremumKind::Maxima => write!(f, "maxima"),
        }
    }
}

/// A local extremum located in a series (internal to detection)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Extremum<V> {
    /// Row index in the source table
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    pub value: V,
    pub kind: ExtremumKind,
}

/// One half-swing of a signal between two consecutive extrema
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle<V> {
    /// Minima label of the swing
    pub minima: V,
    /// Maxima label of the swing
    pub maxima: V,
    /// Absolute value change across the swing, always > 0
    pub amplitude: f64,
    /// Time between the two extrema, never negative
    pub duration: TimeDelta,
    /// Timestamp of the extremum the swing starts at
    pub start: DateTime<Utc>,
    /// Timestamp of the extremum the swing ends at
    pub end: DateTime<Utc>,
}

impl<V: fmt::Display> fmt::Display for Cycle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cycle {{ minima: {}, maxima: {}, amplitude: {}, duration: {:.3}s, start: {} }}",
            self.minima,
            self.maxima,
            self.amplitude,
            self.duration.num_milliseconds() as f64 / 1_000.0,
            self.start.to_rfc3339()
        )
    }
}

/// Result of cycle detection over one series
#[derive(Debug, Clone)]
pub struct CycleResult<V> {
    /// Cycles in temporal order
    cycles: Vec<Cycle<V>>,
    /// Algorithm used for detection
    algorithm: String,
    /// Total number of samples analyzed
    sample_size: usize,
    /// Number of strict extrema found before pairing
    extrema_count: usize,
}

impl<V> CycleResult<V> {
    /// Create a new cycle result
    pub fn new(
        cycles: Vec<Cycle<V>>,
        algorithm: String,
        sample_size: usize,
        extrema_count: usize,
    ) -> Self {
        Self {
            cycles,
            algorithm,
            sample_size,
            extrema_count,
        }
    }

    /// Get the detected cycles in temporal order
    pub fn cycles(&self) -> &[Cycle<V>] {
        &self.cycles
    }

    /// Consume the result, returning the cycles in temporal order
    pub fn into_cycles(self) -> Vec<Cycle<V>> {
        self.cycles
    }

    /// Get the number of detected cycles
    pub fn count(&self) -> usize {
        self.cycles.len()
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the algorithm name used for detection
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Get the sample size that was analyzed
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Get the number of extrema found before pairing
    pub fn extrema_count(&self) -> usize {
        self.extrema_count
    }

    /// Get the largest-amplitude cycle
    pub fn largest(&self) -> Option<&Cycle<V>> {
        self.cycles
            .iter()
            .max_by(|a, b| a.amplitude.total_cmp(&b.amplitude))
    }
}

impl<V: fmt::Display> fmt::Display for CycleResult<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cycle Detection Result:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Extrema found: {}", self.extrema_count)?;
        writeln!(f, "  Cycles detected: {}", self.count())?;

        for cycle in &self.cycles {
            writeln!(f, "    {}", cycle)?;
        }

        Ok(())
    }
}
