use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use signal_core::SeriesTable;
use signal_outlier::{Dtw, DistanceMatrixBuilder, OutlierParameters};

/// Random walk of `size` steps
fn generate_walk(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut level = 0.0;
    (0..size)
        .map(|_| {
            level += rng.gen_range(-1.0..1.0);
            level
        })
        .collect()
}

fn bench_dtw_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("DTW");
    let sizes = [64, 256, 1024];

    for &size in &sizes {
        let a = generate_walk(size, 1);
        let b = generate_walk(size, 2);

        let pruned = Dtw::new();
        let full = Dtw::new().with_pruning(false);
        let banded = Dtw::new().with_window(size / 10);

        group.bench_with_input(BenchmarkId::new("pruned", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| pruned.distance(black_box(a), black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("full", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| full.distance(black_box(a), black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("banded", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| banded.distance(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

fn bench_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("OutlierRanking");
    group.sample_size(10);

    let t0 = Utc.timestamp_opt(0, 0).single().unwrap();
    for &members in &[4usize, 8, 16] {
        let population: Vec<SeriesTable<f64>> = (0..members)
            .map(|i| {
                let values = generate_walk(2_000, i as u64);
                SeriesTable::from_parts(
                    format!("series_{i}"),
                    (0..values.len() as i64).map(|s| t0 + TimeDelta::seconds(s)),
                    values,
                )
            })
            .collect();

        let builder = DistanceMatrixBuilder::new(
            OutlierParameters::new(0.15).unwrap().with_seed(42),
        );
        group.bench_with_input(
            BenchmarkId::new("sequential", members),
            &population,
            |bench, population| bench.iter(|| builder.build(black_box(population))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dtw_kernel, bench_population);
criterion_main!(benches);
