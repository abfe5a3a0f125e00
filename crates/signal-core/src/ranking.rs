//! Stable top-n selection shared by the rankers

use std::cmp::Ordering;

/// Direction of a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest metric first
    Ascending,
    /// Largest metric first
    Descending,
}

impl SortOrder {
    /// `Ascending` when `ascending` is true, `Descending` otherwise
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Orient an ascending comparison result to this direction
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sort `items` by `compare` in the given direction and keep the first `n`
///
/// The sort is stable in both directions: items that compare equal keep their
/// incoming relative order. Asking for more items than exist returns all of them.
pub fn top_n_by<T, F>(mut items: Vec<T>, n: usize, order: SortOrder, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.sort_by(|a, b| order.apply(compare(a, b)));
    items.truncate(n);
    items
}
