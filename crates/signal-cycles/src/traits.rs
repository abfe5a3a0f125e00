//! Core traits for cycle detection

use crate::types::CycleResult;
use signal_core::{Result, SeriesTable};

/// Properties of a cycle detector that don't depend on the input
pub trait CycleDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Smallest series that can contain a cycle
    ///
    /// Shorter series are not an error; they simply yield no cycles.
    fn minimum_sample_size(&self) -> usize;
}

/// Detect half-swing cycles in a single series
pub trait CycleDetection<V>: CycleDetectorProperties {
    /// Detect all cycles, returned in temporal order
    fn detect(&self, table: &SeriesTable<V>) -> Result<CycleResult<V>>;

    /// Detect cycles in several series with the same detector
    fn detect_batch(&self, tables: &[SeriesTable<V>]) -> Result<Vec<CycleResult<V>>> {
        tables.iter().map(|table| self.detect(table)).collect()
    }
}

/// Parameter access for configurable detectors
pub trait ConfigurableDetector {
    type Parameters;

    fn with_parameters(params: Self::Parameters) -> Self;
    fn parameters(&self) -> &Self::Parameters;
    fn set_parameters(&mut self, params: Self::Parameters);
}
