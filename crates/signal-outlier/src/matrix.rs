//! Pairwise distance matrix and outlier ranking
//!
//! Each series of a population is reduced to a random subsample of its values.
//! Every unordered pair of subsamples is scored once with DTW and the distance is
//! added to the totals of both series. The series with the largest totals are the
//! ones least like the rest of the population.
//!
//! # Complexity
//!
//! With `M` series of about `N` samples and a fraction `f`, there are
//! `M * (M - 1) / 2` pairs and each DTW costs `O((f * N)^2)`, for `O(M^2 * (f * N)^2)`
//! overall. Pruning lowers the constant but not the bound; memory per pair is
//! `O(f * N)`.
//!
//! Pair distances are computed through an [`ExecutionEngine`] and then folded
//! serially in pair order, so totals do not depend on the engine used.

use crate::dtw::Dtw;
use crate::subsample::{subsample_size, Subsampler};
use crate::types::{accumulate_totals, OutlierRanking, PairDistance, SeriesScore};
use num_traits::ToPrimitive;
use rand::{thread_rng, Rng};
use signal_core::{
    auto_engine, check_count, check_fraction, top_n_by, Error, ExecutionEngine, Result,
    SequentialEngine, SeriesTable, SortOrder,
};
use tracing::{debug, info, instrument};

/// Default share of each series kept for the distance computation
pub const DEFAULT_SAMPLE_FRACTION: f64 = 0.15;

/// Outlier ranking parameters
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierParameters {
    sample_fraction: f64,
    seed: Option<u64>,
    dtw: Dtw,
}

impl Default for OutlierParameters {
    fn default() -> Self {
        Self {
            sample_fraction: DEFAULT_SAMPLE_FRACTION,
            seed: None,
            dtw: Dtw::new(),
        }
    }
}

impl OutlierParameters {
    /// Parameters keeping `sample_fraction` of every series
    ///
    /// # Errors
    /// `InvalidArgument` unless `0 < sample_fraction <= 1`.
    pub fn new(sample_fraction: f64) -> Result<Self> {
        check_fraction(sample_fraction)?;
        Ok(Self {
            sample_fraction,
            ..Self::default()
        })
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Restrict DTW warping to a band of `window` positions
    pub fn with_window(mut self, window: usize) -> Self {
        self.dtw = self.dtw.with_window(window);
        self
    }

    /// Enable or disable DTW pruning
    pub fn with_pruning(mut self, use_pruning: bool) -> Self {
        self.dtw = self.dtw.with_pruning(use_pruning);
        self
    }

    pub fn sample_fraction(&self) -> f64 {
        self.sample_fraction
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn dtw(&self) -> Dtw {
        self.dtw
    }
}

/// Builds the pairwise DTW distances of a population and ranks its series
#[derive(Debug, Clone)]
pub struct DistanceMatrixBuilder<E = SequentialEngine> {
    engine: E,
    params: OutlierParameters,
}

impl DistanceMatrixBuilder<SequentialEngine> {
    /// Builder computing pairs on the current thread
    pub fn new(params: OutlierParameters) -> Self {
        Self {
            engine: SequentialEngine::new(),
            params,
        }
    }
}

impl<E: ExecutionEngine> DistanceMatrixBuilder<E> {
    /// Builder computing pairs on `engine`
    pub fn with_engine(engine: E, params: OutlierParameters) -> Self {
        Self { engine, params }
    }

    pub fn parameters(&self) -> &OutlierParameters {
        &self.params
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Score every series of `population` against every other one
    ///
    /// # Errors
    /// - `InvalidArgument` for fewer than two series or a bad sample fraction
    /// - `MalformedInput` for an empty series or a value that is not numeric
    #[instrument(skip(self, population), fields(series = population.len()))]
    pub fn build<V>(&self, population: &[SeriesTable<V>]) -> Result<OutlierRanking>
    where
        V: ToPrimitive,
    {
        if population.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "Outlier ranking needs at least 2 series, got {}",
                population.len()
            )));
        }
        check_fraction(self.params.sample_fraction)?;

        let seed = self.params.seed.unwrap_or_else(|| thread_rng().gen());
        debug!(seed, "Seeding subsamples");

        let sampler = Subsampler::new(self.params.sample_fraction, seed);
        let subsamples = population
            .iter()
            .enumerate()
            .map(|(i, table)| {
                let values = numeric_values(table)?;
                debug!(
                    series = table.name(),
                    rows = values.len(),
                    kept = subsample_size(values.len(), self.params.sample_fraction),
                    "Subsampling series"
                );
                Ok(sampler.subsample(&values, i))
            })
            .collect::<Result<Vec<_>>>()?;

        let pair_index = unordered_pairs(population.len());
        info!(
            "Only using {:.1}% of each series, computing DTW for {} pairs of {} series",
            self.params.sample_fraction * 100.0,
            pair_index.len(),
            population.len()
        );

        let dtw = self.params.dtw;
        let distances = self.engine.execute_batch(pair_index.len(), |k| {
            let (a, b) = pair_index[k];
            dtw.distance(&subsamples[a], &subsamples[b])
        });

        let pairs: Vec<PairDistance> = pair_index
            .iter()
            .zip(distances)
            .map(|(&(a, b), distance)| PairDistance { a, b, distance })
            .collect();

        let totals = accumulate_totals(population.len(), &pairs);
        let scores = population
            .iter()
            .zip(totals)
            .enumerate()
            .map(|(index, (table, total_distance))| SeriesScore {
                name: table.name().to_string(),
                index,
                total_distance,
            })
            .collect();

        let scores = top_n_by(scores, population.len(), SortOrder::Descending, |a, b| {
            a.total_distance.total_cmp(&b.total_distance)
        });

        Ok(OutlierRanking::new(
            scores,
            pairs,
            seed,
            self.params.sample_fraction,
        ))
    }
}

/// Every `(a, b)` with `a < b < m`, in lexicographic order
pub fn unordered_pairs(m: usize) -> Vec<(usize, usize)> {
    (0..m)
        .flat_map(|a| (a + 1..m).map(move |b| (a, b)))
        .collect()
}

fn numeric_values<V: ToPrimitive>(table: &SeriesTable<V>) -> Result<Vec<f64>> {
    if table.is_empty() {
        return Err(Error::MalformedInput(format!(
            "Series '{}' has no samples",
            table.name()
        )));
    }
    table
        .values()
        .enumerate()
        .map(|(row, v)| {
            v.to_f64().ok_or_else(|| {
                Error::MalformedInput(format!(
                    "Value at row {row} of series '{}' is not numeric",
                    table.name()
                ))
            })
        })
        .collect()
}

/// Names of the `n` series least like the rest of the population
///
/// Draws a fresh random seed on every call; see [`rank_outlier_series_seeded`]
/// for reproducible results.
///
/// # Errors
/// `InvalidArgument` when `n` is zero, `sample_fraction` is outside `(0, 1]` or the
/// population has fewer than two series. `MalformedInput` for an empty series.
pub fn rank_outlier_series<V>(
    population: &[SeriesTable<V>],
    n: usize,
    sample_fraction: f64,
) -> Result<Vec<String>>
where
    V: ToPrimitive,
{
    check_count(n)?;
    let params = OutlierParameters::new(sample_fraction)?;
    let ranking = DistanceMatrixBuilder::with_engine(auto_engine(), params).build(population)?;
    Ok(ranking.top_names(n))
}

/// [`rank_outlier_series`] with a fixed subsampling seed
pub fn rank_outlier_series_seeded<V>(
    population: &[SeriesTable<V>],
    n: usize,
    sample_fraction: f64,
    seed: u64,
) -> Result<Vec<String>>
where
    V: ToPrimitive,
{
    check_count(n)?;
    let params = OutlierParameters::new(sample_fraction)?.with_seed(seed);
    let ranking = DistanceMatrixBuilder::with_engine(auto_engine(), params).build(population)?;
    Ok(ranking.top_names(n))
}
