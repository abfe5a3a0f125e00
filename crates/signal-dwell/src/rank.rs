//! Occurrence and dwell-time rankers
//!
//! Both rankers group samples by their exact value, aggregate each group, and return
//! the first `n` groups after a stable sort. Ties keep first-seen group order.

use crate::annotator::annotate_dwell;
use crate::types::{DwellRank, OccurrenceRank, RankedValue};
use chrono::TimeDelta;
use signal_core::{check_count, group_and_reduce, top_n_by, GroupKey, Result, SeriesTable, SortOrder};
use tracing::{debug, instrument};

/// Count how many samples carry each distinct value
///
/// Groups are returned in first-seen order; the counts always sum to the number of
/// rows in the table.
pub fn occurrence_counts<V>(table: &SeriesTable<V>) -> Vec<OccurrenceRank<V>>
where
    V: GroupKey + Clone,
{
    group_and_reduce(table.values().map(|v| (v, ())), || 0usize, |count, _| *count += 1)
        .into_iter()
        .map(|(value, count)| RankedValue::new(value, count))
        .collect()
}

/// Sum the dwell time spent in each distinct value
///
/// Groups are returned in first-seen order. The final sample has no dwell and
/// contributes nothing, so a value seen only there totals zero.
pub fn total_dwell_by_value<V>(table: &SeriesTable<V>) -> Vec<DwellRank<V>>
where
    V: GroupKey + Clone,
{
    let records = annotate_dwell(table);

    group_and_reduce(
        records.iter().map(|r| (r.value, r.dwell)),
        TimeDelta::zero,
        |total, dwell| {
            if let Some(d) = dwell {
                *total = *total + d;
            }
        },
    )
    .into_iter()
    .map(|(value, total)| RankedValue::new(value, total))
    .collect()
}

/// Rank distinct values by number of occurrences
///
/// With `ascending` the least common values come first, otherwise the most common.
/// At most `n` entries are returned; a larger `n` than there are distinct values
/// returns all of them.
///
/// # Errors
/// `InvalidArgument` when `n` is zero.
#[instrument(skip(table), fields(series = table.name(), rows = table.len()))]
pub fn rank_by_occurrence<V>(
    table: &SeriesTable<V>,
    n: usize,
    ascending: bool,
) -> Result<Vec<OccurrenceRank<V>>>
where
    V: GroupKey + Clone,
{
    check_count(n)?;

    let counts = occurrence_counts(table);
    debug!("Ranking {} distinct values by occurrence", counts.len());

    Ok(top_n_by(counts, n, SortOrder::from_ascending(ascending), |a, b| {
        a.metric.cmp(&b.metric)
    }))
}

/// Rank distinct values by total dwell time
///
/// With `ascending` the values the series spent least time in come first, otherwise
/// the ones it spent most time in. At most `n` entries are returned.
///
/// # Errors
/// `InvalidArgument` when `n` is zero.
#[instrument(skip(table), fields(series = table.name(), rows = table.len()))]
pub fn rank_by_dwell_time<V>(
    table: &SeriesTable<V>,
    n: usize,
    ascending: bool,
) -> Result<Vec<DwellRank<V>>>
where
    V: GroupKey + Clone,
{
    check_count(n)?;

    let totals = total_dwell_by_value(table);
    debug!("Ranking {} distinct values by dwell time", totals.len());

    Ok(top_n_by(totals, n, SortOrder::from_ascending(ascending), |a, b| {
        a.metric.cmp(&b.metric)
    }))
}
