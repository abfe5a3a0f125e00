//! Per-sample dwell time
//!
//! The dwell of sample `i` is how long the series stayed at that sample's value
//! before the next sample arrived: `timestamp[i + 1] - timestamp[i]`. The last
//! sample has no successor and therefore no dwell.

use chrono::TimeDelta;
use signal_core::SeriesTable;

/// Dwell annotation for one sample
///
/// Borrows the value from the source table; records are meant to be consumed by a
/// ranker straight away rather than stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DwellRecord<'a, V> {
    /// The sample's state value
    pub value: &'a V,
    /// Time until the next sample, `None` for the final sample
    pub dwell: Option<TimeDelta>,
}

/// Annotate every sample of `table` with its dwell time
///
/// The output has the same length and order as the table. Equal consecutive
/// timestamps give a zero dwell; out-of-order timestamps give a negative dwell,
/// which is passed through unchanged so that totals reflect it.
pub fn annotate_dwell<V>(table: &SeriesTable<V>) -> Vec<DwellRecord<'_, V>> {
    let samples = table.samples();

    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| DwellRecord {
            value: &sample.value,
            dwell: samples
                .get(i + 1)
                .map(|next| next.timestamp.signed_duration_since(sample.timestamp)),
        })
        .collect()
}

/// Sum of all defined dwell times in `table`
///
/// Equals the span between the first and last timestamp for a table of at least one
/// sample; zero for an empty table.
pub fn total_dwell<V>(table: &SeriesTable<V>) -> TimeDelta {
    annotate_dwell(table)
        .iter()
        .filter_map(|r| r.dwell)
        .fold(TimeDelta::zero(), |acc, d| acc + d)
}
