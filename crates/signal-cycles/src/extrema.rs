//! Strict local extrema and their pairing labels
//!
//! Only strict extrema are recognised: a sample must be strictly below (minima) or
//! strictly above (maxima) both neighbours. Flat peaks and valleys are never marked,
//! so a plateaued signal yields no extrema at all.

use crate::types::{Extremum, ExtremumKind};
use signal_core::SeriesTable;

/// Classify every sample as minima, maxima or neither
///
/// Boundary samples are never extrema. Comparisons involving an unordered value
/// (NaN) are false, so such samples and their neighbours are left unmarked.
pub(crate) fn mark_extrema<V: PartialOrd>(values: &[V]) -> Vec<Option<ExtremumKind>> {
    let mut marks = vec![None; values.len()];

    for (i, w) in values.windows(3).enumerate() {
        let (prev, cur, next) = (&w[0], &w[1], &w[2]);
        marks[i + 1] = if prev > cur && next > cur {
            Some(ExtremumKind::Minima)
        } else if prev < cur && next < cur {
            Some(ExtremumKind::Maxima)
        } else {
            None
        };
    }

    marks
}

/// Collapse a table to the subsequence of its extrema, in temporal order
///
/// Tables with fewer than three samples have no interior points and give an empty
/// sequence.
pub(crate) fn collapse_to_extrema<V: Copy + PartialOrd>(table: &SeriesTable<V>) -> Vec<Extremum<V>> {
    let values: Vec<V> = table.values().copied().collect();
    let samples = table.samples();

    mark_extrema(&values)
        .into_iter()
        .enumerate()
        .filter_map(|(index, mark)| {
            mark.map(|kind| Extremum {
                index,
                timestamp: samples[index].timestamp,
                value: samples[index].value,
                kind,
            })
        })
        .collect()
}

/// Minima/maxima labels attached to one extremum
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PairLabels<V> {
    pub minima: Option<V>,
    pub maxima: Option<V>,
}

/// Give every extremum both a minima and a maxima label
///
/// An extremum labels its own kind with its own value. The other label is
/// back-filled from the next extremum of that kind later in the sequence. The
/// trailing extrema may have no later counterpart, in which case that label stays
/// `None`. Empty input gives empty output; a single extremum only carries its own
/// label.
pub(crate) fn backfill_pair_labels<V: Copy>(extrema: &[Extremum<V>]) -> Vec<PairLabels<V>> {
    let mut next_minima = None;
    let mut next_maxima = None;

    let mut labels: Vec<PairLabels<V>> = extrema
        .iter()
        .rev()
        .map(|e| {
            match e.kind {
                ExtremumKind::Minima => next_minima = Some(e.value),
                ExtremumKind::Maxima => next_maxima = Some(e.value),
            }
            PairLabels {
                minima: next_minima,
                maxima: next_maxima,
            }
        })
        .collect();

    labels.reverse();
    labels
}
