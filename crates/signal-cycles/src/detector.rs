//! Extrema-based cycle detection
//!
//! A cycle is one half-swing of the signal between two consecutive strict extrema.
//! Its amplitude is the absolute value change between them and its duration the
//! absolute time between them. Swings with zero amplitude are dropped: they come
//! from flat or duplicate-valued extrema and are not real cycles.
//!
//! Plateaued signals produce no strict extrema and therefore no cycles. This is the
//! documented behaviour, not an error condition.

use crate::extrema::{backfill_pair_labels, collapse_to_extrema};
use crate::traits::{CycleDetection, CycleDetectorProperties, ConfigurableDetector};
use crate::types::{Cycle, CycleResult};
use num_traits::ToPrimitive;
use signal_core::{check_count, top_n_by, Error, Result, SeriesTable, SortOrder};
use tracing::{debug, instrument};

/// Cycle detection parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CycleParameters {
    /// Swings must have an amplitude strictly greater than this to count as cycles.
    /// Negative values act as zero: zero-amplitude swings are never cycles.
    pub min_amplitude: f64,
}

impl Default for CycleParameters {
    fn default() -> Self {
        Self { min_amplitude: 0.0 }
    }
}

/// Detector pairing consecutive strict extrema into cycles
#[derive(Debug, Clone, Default)]
pub struct ExtremaCycleDetector {
    params: CycleParameters,
}

impl ExtremaCycleDetector {
    /// Create a detector that keeps every non-zero swing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector that ignores swings at or below `min_amplitude`
    pub fn with_min_amplitude(min_amplitude: f64) -> Result<Self> {
        if !(min_amplitude >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "Minimum amplitude {min_amplitude} must be a non-negative number"
            )));
        }
        Ok(Self {
            params: CycleParameters { min_amplitude },
        })
    }
}

impl CycleDetectorProperties for ExtremaCycleDetector {
    fn algorithm_name(&self) -> &'static str {
        "StrictExtrema"
    }

    fn minimum_sample_size(&self) -> usize {
        3
    }
}

impl<V> CycleDetection<V> for ExtremaCycleDetector
where
    V: Copy + PartialOrd + ToPrimitive,
{
    fn detect(&self, table: &SeriesTable<V>) -> Result<CycleResult<V>> {
        let extrema = collapse_to_extrema(table);
        let labels = backfill_pair_labels(&extrema);

        debug!(
            series = table.name(),
            extrema = extrema.len(),
            "Collapsed series to strict extrema"
        );

        let threshold = self.params.min_amplitude.max(0.0);
        let mut cycles = Vec::with_capacity(extrema.len().saturating_sub(1));

        for (k, pair) in extrema.windows(2).enumerate() {
            let (from, to) = (&pair[0], &pair[1]);
            let amplitude = (as_f64(from.value, from.index)? - as_f64(to.value, to.index)?).abs();

            // Also rejects NaN amplitudes
            if !(amplitude > threshold) {
                continue;
            }

            // Without both back-filled labels the swing's own ends describe it
            let (minima, maxima) = match (labels[k].minima, labels[k].maxima) {
                (Some(minima), Some(maxima)) => (minima, maxima),
                _ if from.value < to.value => (from.value, to.value),
                _ => (to.value, from.value),
            };

            cycles.push(Cycle {
                minima,
                maxima,
                amplitude,
                duration: (to.timestamp - from.timestamp).abs(),
                start: from.timestamp,
                end: to.timestamp,
            });
        }

        Ok(CycleResult::new(
            cycles,
            self.algorithm_name().to_string(),
            table.len(),
            extrema.len(),
        ))
    }
}

impl ConfigurableDetector for ExtremaCycleDetector {
    type Parameters = CycleParameters;

    fn with_parameters(params: Self::Parameters) -> Self {
        Self { params }
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) {
        self.params = params;
    }
}

fn as_f64<V: ToPrimitive>(value: V, index: usize) -> Result<f64> {
    value.to_f64().ok_or_else(|| {
        Error::MalformedInput(format!("Value at row {index} cannot be represented as f64"))
    })
}

/// Detect all cycles of a series in temporal order
pub fn detect_cycles<V>(table: &SeriesTable<V>) -> Result<Vec<Cycle<V>>>
where
    V: Copy + PartialOrd + ToPrimitive,
{
    Ok(ExtremaCycleDetector::new().detect(table)?.into_cycles())
}

/// Rank the cycles of a series by amplitude
///
/// With `smallest` the lowest-amplitude cycles come first, otherwise the highest.
/// Cycles of equal amplitude stay in temporal order. At most `n` cycles are
/// returned; series shorter than three samples or without any swing return none.
///
/// # Errors
/// `InvalidArgument` when `n` is zero.
#[instrument(skip(table), fields(series = table.name(), rows = table.len()))]
pub fn rank_cycles<V>(table: &SeriesTable<V>, n: usize, smallest: bool) -> Result<Vec<Cycle<V>>>
where
    V: Copy + PartialOrd + ToPrimitive,
{
    check_count(n)?;

    let cycles = detect_cycles(table)?;
    debug!("Ranking {} cycles by amplitude", cycles.len());

    Ok(top_n_by(cycles, n, SortOrder::from_ascending(smallest), |a, b| {
        a.amplitude.total_cmp(&b.amplitude)
    }))
}
