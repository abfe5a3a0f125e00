//! Property and scenario tests for cycle ranking

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use signal_core::SeriesTable;
use signal_cycles::{detect_cycles, rank_cycles, CycleDetection, ExtremaCycleDetector};
use std::f64::consts::PI;

fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()
}

fn regular(values: Vec<f64>, step_ms: i64) -> SeriesTable<f64> {
    let t0 = epoch();
    SeriesTable::from_parts(
        "signal",
        (0..values.len() as i64).map(|i| t0 + TimeDelta::milliseconds(i * step_ms)),
        values,
    )
}

proptest! {
    #[test]
    fn prop_no_zero_amplitude_cycles(
        values in prop::collection::vec(-5i32..5, 0..300),
        n in 1usize..50,
        smallest in any::<bool>(),
    ) {
        let table = regular(values.into_iter().map(f64::from).collect(), 1_000);
        for cycle in rank_cycles(&table, n, smallest).unwrap() {
            prop_assert!(cycle.amplitude > 0.0);
            prop_assert!(cycle.duration >= TimeDelta::zero());
        }
    }

    #[test]
    fn prop_strictly_increasing_has_no_cycles(
        start in -1000.0f64..1000.0,
        steps in prop::collection::vec(0.001f64..10.0, 0..200),
    ) {
        let mut v = start;
        let values: Vec<f64> = steps.iter().map(|s| { v += s; v }).collect();
        prop_assert!(rank_cycles(&regular(values, 250), 10, false).unwrap().is_empty());
    }

    #[test]
    fn prop_ranking_is_idempotent_and_sorted(
        values in prop::collection::vec(-100.0f64..100.0, 0..200),
        n in 1usize..30,
        smallest in any::<bool>(),
    ) {
        let table = regular(values, 500);
        let first = rank_cycles(&table, n, smallest).unwrap();
        let second = rank_cycles(&table, n, smallest).unwrap();
        prop_assert_eq!(&first, &second);

        for pair in first.windows(2) {
            if smallest {
                prop_assert!(pair[0].amplitude <= pair[1].amplitude);
            } else {
                prop_assert!(pair[0].amplitude >= pair[1].amplitude);
            }
        }
    }
}

#[test]
fn test_five_point_example() {
    let table = regular(vec![5.0, 3.0, 5.0, 3.0, 5.0], 1_000);
    let ranked = rank_cycles(&table, 2, true).unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].amplitude, 2.0);
    assert_eq!(ranked[1].amplitude, 2.0);
    assert_eq!(ranked[0].duration, TimeDelta::seconds(1));
    assert_eq!(ranked[1].duration, TimeDelta::seconds(1));
    assert!(ranked[0].start < ranked[1].start);
}

#[test]
fn test_sine_wave_half_swings() {
    // 4 full periods sampled 40 times each, with a small phase offset so that no
    // sample lands exactly on a flat top
    let values: Vec<f64> = (0..160)
        .map(|i| 3.0 * (2.0 * PI * i as f64 / 40.0 + 0.1).sin())
        .collect();
    let table = regular(values, 100);

    let cycles = detect_cycles(&table).unwrap();
    assert_eq!(cycles.len(), 7);
    for cycle in &cycles {
        assert!((cycle.amplitude - 6.0).abs() < 0.05);
        assert_eq!(cycle.duration, TimeDelta::seconds(2));
    }
}

#[test]
fn test_noisy_signal_batch_detection() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let tables: Vec<SeriesTable<f64>> = (0..4)
        .map(|_| regular((0..120).map(|_| rng.gen_range(-1.0..1.0)).collect(), 1_000))
        .collect();

    let detector = ExtremaCycleDetector::new();
    let results = detector.detect_batch(&tables).unwrap();
    assert_eq!(results.len(), 4);
    for (result, table) in results.iter().zip(&tables) {
        assert_eq!(result.sample_size(), table.len());
        assert!(result.count() < result.extrema_count().max(1));
        assert!(result.cycles().windows(2).all(|w| w[0].start < w[1].start));
    }
}
