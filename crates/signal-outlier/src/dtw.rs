//! Dynamic Time Warping (DTW) distance with optional pruning
//!
//! The local cost of aligning two points is their squared difference and the
//! returned distance is the square root of the cheapest accumulated cost, so for
//! equal-length series DTW never exceeds the Euclidean distance.
//!
//! The full cost matrix is `O(n * m)` in time. Only two rows are kept in memory.
//!
//! # Pruning
//!
//! Before filling the matrix an upper bound is taken from one concrete warping
//! path: the diagonal, then straight along the tail of the longer series. Any cell
//! whose accumulated cost exceeds that bound cannot be on the optimal path. Such
//! cells are marked unreachable, and each row's scan starts at the first reachable
//! column and stops once nothing further right can be reached. The distance is the
//! same as without pruning.

/// Relative slack added to the pruning bound so that rounding never prunes the
/// bounding path itself
const PRUNING_SLACK: f64 = 1e-9;

/// DTW distance calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dtw {
    window: Option<usize>,
    use_pruning: bool,
}

impl Default for Dtw {
    fn default() -> Self {
        Self {
            window: None,
            use_pruning: true,
        }
    }
}

impl Dtw {
    /// Unconstrained DTW with pruning enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict warping to a Sakoe-Chiba band of `window` positions
    ///
    /// The band is widened to the length difference of the two series when
    /// narrower, so that an alignment always exists.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    /// Enable or disable pruning
    pub fn with_pruning(mut self, use_pruning: bool) -> Self {
        self.use_pruning = use_pruning;
        self
    }

    /// Warping window, `None` when unconstrained
    pub fn window(&self) -> Option<usize> {
        self.window
    }

    /// Whether pruning is enabled
    pub fn use_pruning(&self) -> bool {
        self.use_pruning
    }

    /// DTW distance between `a` and `b`
    ///
    /// Two empty series are at distance zero; an empty series is infinitely far
    /// from a non-empty one.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return 0.0,
            (true, false) | (false, true) => return f64::INFINITY,
            _ => {}
        }

        let n = a.len();
        let m = b.len();
        let window = self.window.map_or(n.max(m), |w| w.max(n.abs_diff(m)));

        let bound = if self.use_pruning {
            let ub = upper_bound_cost(a, b);
            ub + ub * PRUNING_SLACK
        } else {
            f64::INFINITY
        };

        let mut prev = vec![f64::INFINITY; m + 1];
        let mut cur = vec![f64::INFINITY; m + 1];
        prev[0] = 0.0;

        // First reachable column and last reachable column of the previous row
        let mut start = 1;
        let mut prev_end = 0;

        for i in 1..=n {
            cur.fill(f64::INFINITY);

            let lo = start.max(i.saturating_sub(window)).max(1);
            let hi = m.min(i + window);

            let mut row_start = None;
            let mut row_end = 0;

            for j in lo..=hi {
                let best = prev[j - 1].min(prev[j]).min(cur[j - 1]);
                let diff = a[i - 1] - b[j - 1];
                let cost = best + diff * diff;

                if cost.is_finite() && cost <= bound {
                    cur[j] = cost;
                    row_start.get_or_insert(j);
                    row_end = j;
                } else if j > prev_end {
                    // Only the left neighbour could feed further cells, and it is unreachable
                    break;
                }
            }

            match row_start {
                Some(s) => start = s,
                None => return f64::INFINITY,
            }
            prev_end = row_end;
            std::mem::swap(&mut prev, &mut cur);
        }

        prev[m].sqrt()
    }
}

/// Accumulated squared cost of the diagonal-then-tail warping path
///
/// Aligns `a[k]` with `b[k]` up to the shorter length, then aligns the remaining
/// points of the longer series with the last point of the shorter one. This is a
/// valid warping path, so its cost bounds the optimal DTW cost from above.
pub fn upper_bound_cost(a: &[f64], b: &[f64]) -> f64 {
    let k = a.len().min(b.len());
    if k == 0 {
        return f64::INFINITY;
    }

    let diagonal: f64 = a[..k]
        .iter()
        .zip(&b[..k])
        .map(|(x, y)| (x - y) * (x - y))
        .sum();

    let (longer, anchor) = if a.len() > b.len() {
        (&a[k..], b[k - 1])
    } else {
        (&b[k..], a[k - 1])
    };
    let tail: f64 = longer.iter().map(|x| (x - anchor) * (x - anchor)).sum();

    diagonal + tail
}

/// Unconstrained DTW distance with pruning
pub fn dtw_distance(a: &[f64], b: &[f64]) -> f64 {
    Dtw::new().distance(a, b)
}

/// Unconstrained DTW distance computed over the full matrix
pub fn dtw_distance_unpruned(a: &[f64], b: &[f64]) -> f64 {
    Dtw::new().with_pruning(false).distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Straightforward full-matrix DTW to compare against
    fn reference(a: &[f64], b: &[f64]) -> f64 {
        let (n, m) = (a.len(), b.len());
        let mut d = vec![vec![f64::INFINITY; m + 1]; n + 1];
        d[0][0] = 0.0;
        for i in 1..=n {
            for j in 1..=m {
                let c = (a[i - 1] - b[j - 1]).powi(2);
                d[i][j] = c + d[i - 1][j].min(d[i][j - 1]).min(d[i - 1][j - 1]);
            }
        }
        d[n][m].sqrt()
    }

    #[test]
    fn test_identical_series() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(dtw_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_single_element() {
        assert_relative_eq!(dtw_distance(&[5.0], &[3.0]), 2.0);
    }

    #[test]
    fn test_shifted_series_warp() {
        let a = vec![0.0, 0.0, 1.0, 2.0, 1.0, 0.0];
        let b = vec![0.0, 1.0, 2.0, 1.0, 0.0, 0.0];
        assert_relative_eq!(dtw_distance(&a, &b), 0.0);

        let euclidean = a
            .iter()
            .zip(&b)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt();
        assert!(euclidean > 0.0);
    }

    #[test]
    fn test_different_lengths() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let d = dtw_distance(&a, &b);
        assert_relative_eq!(d, reference(&a, &b), epsilon = 1e-12);
        assert_relative_eq!(d, 5.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_empty() {
        assert_eq!(dtw_distance(&[], &[]), 0.0);
        assert_eq!(dtw_distance(&[], &[1.0, 2.0]), f64::INFINITY);
        assert_eq!(dtw_distance(&[1.0], &[]), f64::INFINITY);
    }

    #[test]
    fn test_pruned_matches_unpruned() {
        let a = vec![0.3, 1.9, 2.2, -0.4, 5.5, 3.1, 0.0, 0.7];
        let b = vec![1.0, 1.2, -2.0, 4.4, 4.0, 0.1, 0.2];
        let pruned = dtw_distance(&a, &b);
        let full = dtw_distance_unpruned(&a, &b);
        assert_relative_eq!(pruned, full, epsilon = 1e-12);
        assert_relative_eq!(full, reference(&a, &b), epsilon = 1e-12);
    }

    #[test]
    fn test_upper_bound_dominates() {
        let a = vec![3.0, 1.0, 4.0, 1.0, 5.0];
        let b = vec![2.0, 7.0, 1.0];
        assert!(dtw_distance(&a, &b).powi(2) <= upper_bound_cost(&a, &b) + 1e-12);
        assert_relative_eq!(upper_bound_cost(&[1.0, 2.0], &[1.0, 2.0, 4.0]), 4.0);
    }

    #[test]
    fn test_window_never_beats_unconstrained() {
        let a = vec![1.0, 5.0, 2.0, 8.0, 3.0, 3.0, 9.0];
        let b = vec![2.0, 2.0, 6.0, 1.0, 7.0, 4.0, 8.0];
        let full = dtw_distance(&a, &b);
        for w in 0..7 {
            let banded = Dtw::new().with_window(w).distance(&a, &b);
            let banded_full = Dtw::new().with_window(w).with_pruning(false).distance(&a, &b);
            assert!(banded >= full - 1e-12);
            assert_relative_eq!(banded, banded_full, epsilon = 1e-12);
        }
        // Zero band on equal lengths is the Euclidean distance
        let euclidean = upper_bound_cost(&a, &b).sqrt();
        assert_relative_eq!(Dtw::new().with_window(0).distance(&a, &b), euclidean, epsilon = 1e-12);
    }

    #[test]
    fn test_builder_accessors() {
        let dtw = Dtw::new().with_window(3).with_pruning(false);
        assert_eq!(dtw.window(), Some(3));
        assert!(!dtw.use_pruning());
        assert!(Dtw::default().use_pruning());
    }
}
