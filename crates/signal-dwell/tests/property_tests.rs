//! Property-based tests for the occurrence and dwell rankers

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use signal_core::SeriesTable;
use signal_dwell::{
    occurrence_counts, rank_by_dwell_time, rank_by_occurrence, total_dwell, total_dwell_by_value,
};

fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(1_600_000_000, 0).single().unwrap()
}

/// Build a table from per-sample gaps (seconds) and discrete state values
fn table_from(gaps: &[i64], states: &[u8]) -> SeriesTable<u8> {
    let mut t = epoch();
    let mut stamps = Vec::with_capacity(states.len());
    for (i, _) in states.iter().enumerate() {
        stamps.push(t);
        t += TimeDelta::seconds(gaps[i % gaps.len()]);
    }
    SeriesTable::from_parts("prop", stamps, states.to_vec())
}

proptest! {
    #[test]
    fn prop_counts_sum_to_row_count(
        states in prop::collection::vec(0u8..6, 0..200),
        gaps in prop::collection::vec(0i64..120, 1..20),
    ) {
        let table = table_from(&gaps, &states);
        let total: usize = occurrence_counts(&table).iter().map(|r| r.metric).sum();
        prop_assert_eq!(total, table.len());
    }

    #[test]
    fn prop_occurrence_prefix_is_sorted(
        states in prop::collection::vec(0u8..10, 1..200),
        n in 1usize..12,
        ascending in any::<bool>(),
    ) {
        let table = table_from(&[1], &states);
        let ranked = rank_by_occurrence(&table, n, ascending).unwrap();

        prop_assert!(ranked.len() <= n);
        for pair in ranked.windows(2) {
            if ascending {
                prop_assert!(pair[0].metric <= pair[1].metric);
            } else {
                prop_assert!(pair[0].metric >= pair[1].metric);
            }
        }
    }

    #[test]
    fn prop_rankers_are_idempotent(
        states in prop::collection::vec(0u8..5, 0..100),
        gaps in prop::collection::vec(0i64..60, 1..10),
        n in 1usize..8,
        ascending in any::<bool>(),
    ) {
        let table = table_from(&gaps, &states);
        prop_assert_eq!(
            rank_by_occurrence(&table, n, ascending).unwrap(),
            rank_by_occurrence(&table, n, ascending).unwrap()
        );
        prop_assert_eq!(
            rank_by_dwell_time(&table, n, ascending).unwrap(),
            rank_by_dwell_time(&table, n, ascending).unwrap()
        );
    }

    #[test]
    fn prop_dwell_totals_cover_the_span(
        states in prop::collection::vec(0u8..4, 1..150),
        gaps in prop::collection::vec(0i64..300, 1..15),
    ) {
        let table = table_from(&gaps, &states);
        let summed = total_dwell_by_value(&table)
            .iter()
            .fold(TimeDelta::zero(), |acc, r| acc + r.metric);

        let first = table.samples()[0].timestamp;
        let last = table.samples()[table.len() - 1].timestamp;
        prop_assert_eq!(summed, last - first);
        prop_assert_eq!(summed, total_dwell(&table));
    }
}

#[test]
fn test_large_n_returns_every_distinct_value() {
    let table = table_from(&[1], &[1, 2, 3, 1, 2, 1]);
    let ranked = rank_by_occurrence(&table, 1000, true).unwrap();
    assert_eq!(ranked.len(), 3);
}

#[test]
fn test_random_signal_ranking_is_consistent_with_counts() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let states: Vec<u8> = (0..500).map(|_| rng.gen_range(0..8)).collect();
    let gaps: Vec<i64> = (0..50).map(|_| rng.gen_range(1..30)).collect();
    let table = table_from(&gaps, &states);

    let most = rank_by_occurrence(&table, 1, false).unwrap();
    let max_count = occurrence_counts(&table).iter().map(|r| r.metric).max().unwrap();
    assert_eq!(most[0].metric, max_count);

    let least = rank_by_dwell_time(&table, 1, true).unwrap();
    let min_dwell = total_dwell_by_value(&table).iter().map(|r| r.metric).min().unwrap();
    assert_eq!(least[0].metric, min_dwell);
}

#[test]
fn test_dwell_example_from_three_samples() {
    let t0 = epoch();
    let table = SeriesTable::from_parts(
        "example",
        vec![t0, t0 + TimeDelta::seconds(2), t0 + TimeDelta::seconds(5)],
        vec!["A".to_string(), "A".to_string(), "B".to_string()],
    );

    let ranked = rank_by_dwell_time(&table, 5, false).unwrap();
    assert_eq!(ranked[0].value, "A");
    assert_eq!(ranked[0].metric, TimeDelta::seconds(5));
    assert_eq!(ranked[1].value, "B");
    assert_eq!(ranked[1].metric, TimeDelta::zero());
}
