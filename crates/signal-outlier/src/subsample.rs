//! Uniform subsampling without replacement
//!
//! Every series in a population draws from its own generator, seeded with
//! `seed + series_index`, so a run is reproducible from a single seed and does not
//! depend on the order in which series are processed.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use tracing::warn;

/// Number of samples kept from a series of `len` samples at `fraction`
///
/// Rounds to the nearest integer and never goes below one sample for a
/// non-empty series.
pub fn subsample_size(len: usize, fraction: f64) -> usize {
    if len == 0 {
        return 0;
    }
    let size = (len as f64 * fraction).round() as usize;
    size.clamp(1, len)
}

/// Seeded subsampler shared by all series of one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subsampler {
    fraction: f64,
    seed: u64,
}

impl Subsampler {
    /// `fraction` is expected to be validated by the caller
    pub fn new(fraction: f64, seed: u64) -> Self {
        Self { fraction, seed }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Subsample the values of series number `stream`
    ///
    /// Kept values stay in their original temporal order.
    pub fn subsample(&self, values: &[f64], stream: usize) -> Vec<f64> {
        let len = values.len();
        let size = subsample_size(len, self.fraction);

        if len > 0 && (len as f64 * self.fraction).round() < 1.0 {
            warn!(
                len,
                fraction = self.fraction,
                "Subsample would be empty, keeping a single sample"
            );
        }

        if size == len {
            return values.to_vec();
        }

        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(stream as u64));
        let mut picked = index::sample(&mut rng, len, size).into_vec();
        picked.sort_unstable();
        picked.into_iter().map(|i| values[i]).collect()
    }
}
