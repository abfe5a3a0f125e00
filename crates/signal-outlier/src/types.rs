//! Result types for outlier ranking

use std::fmt;

/// DTW distance between two series of the population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistance {
    /// Population index of the first series
    pub a: usize,
    /// Population index of the second series, always greater than `a`
    pub b: usize,
    pub distance: f64,
}

/// Summed distance from one series to every other series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesScore {
    pub name: String,
    /// Position of the series in the input population
    pub index: usize,
    pub total_distance: f64,
}

impl fmt::Display for SeriesScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.4}", self.name, self.total_distance)
    }
}

/// Sum pair distances into one total per series
///
/// Triples are folded in the order given, so the same pairs always give
/// bit-identical totals.
pub fn accumulate_totals(population_size: usize, pairs: &[PairDistance]) -> Vec<f64> {
    pairs
        .iter()
        .fold(vec![0.0; population_size], |mut totals, pair| {
            totals[pair.a] += pair.distance;
            totals[pair.b] += pair.distance;
            totals
        })
}

/// Full result of an outlier ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierRanking {
    scores: Vec<SeriesScore>,
    pairs: Vec<PairDistance>,
    seed: u64,
    sample_fraction: f64,
}

impl OutlierRanking {
    pub(crate) fn new(
        scores: Vec<SeriesScore>,
        pairs: Vec<PairDistance>,
        seed: u64,
        sample_fraction: f64,
    ) -> Self {
        Self {
            scores,
            pairs,
            seed,
            sample_fraction,
        }
    }

    /// Every series, most dissimilar first
    pub fn scores(&self) -> &[SeriesScore] {
        &self.scores
    }

    /// The first `n` scores
    pub fn top(&self, n: usize) -> &[SeriesScore] {
        &self.scores[..n.min(self.scores.len())]
    }

    /// Names of the first `n` series
    pub fn top_names(&self, n: usize) -> Vec<String> {
        self.top(n).iter().map(|s| s.name.clone()).collect()
    }

    /// Pair distances in enumeration order
    pub fn pairs(&self) -> &[PairDistance] {
        &self.pairs
    }

    /// Seed the subsamples were drawn with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sample_fraction(&self) -> f64 {
        self.sample_fraction
    }

    /// Total distance of a series by name
    pub fn total_for(&self, name: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.total_distance)
    }
}

impl fmt::Display for OutlierRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Outlier ranking over {} series ({} pairs, fraction {}, seed {})",
            self.scores.len(),
            self.pairs.len(),
            self.sample_fraction,
            self.seed
        )?;
        for (rank, score) in self.scores.iter().enumerate() {
            writeln!(f, "  {}. {}", rank + 1, score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_totals() {
        let pairs = vec![
            PairDistance { a: 0, b: 1, distance: 1.0 },
            PairDistance { a: 0, b: 2, distance: 2.0 },
            PairDistance { a: 1, b: 2, distance: 4.0 },
        ];
        assert_eq!(accumulate_totals(3, &pairs), vec![3.0, 5.0, 6.0]);
        assert_eq!(accumulate_totals(2, &[]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_top_clamps() {
        let ranking = OutlierRanking::new(
            vec![
                SeriesScore { name: "b".into(), index: 1, total_distance: 2.0 },
                SeriesScore { name: "a".into(), index: 0, total_distance: 1.0 },
            ],
            vec![],
            0,
            1.0,
        );
        assert_eq!(ranking.top(10).len(), 2);
        assert_eq!(ranking.top_names(1), vec!["b".to_string()]);
        assert_eq!(ranking.total_for("a"), Some(1.0));
        assert_eq!(ranking.total_for("zzz"), None);
    }
}
