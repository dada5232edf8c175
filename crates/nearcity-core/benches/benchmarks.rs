use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nearcity_core::prelude::*;
use std::hint::black_box;

/// A regular lat/lng grid over North America, roughly one city per cell.
fn grid_index(rows: usize, cols: usize) -> ProximityIndex {
    let mut records = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let lat = 25.0 + 30.0 * r as f64 / rows as f64;
            let lng = -125.0 + 60.0 * c as f64 / cols as f64;
            records.push(LargeCityRecord {
                display_name: format!("Grid {r}x{c}, XX"),
                citystate_code: format!("grid+{r}x{c}-xx"),
                population: 100_000,
                coordinates: Coordinates::new(lat, lng).unwrap(),
            });
        }
    }
    ProximityIndex::from_records(records).unwrap()
}

fn bench_queries(c: &mut Criterion) {
    let query = Coordinates::new(33.6846, -117.8265).unwrap();
    let mut group = c.benchmark_group("proximity");

    for &side in &[30usize, 100] {
        let index = grid_index(side, side);
        let n = index.len();

        group.bench_with_input(BenchmarkId::new("k_nearest_20", n), &index, |b, idx| {
            b.iter(|| idx.find_k_nearest(black_box(&query), 20).unwrap().len())
        });
        group.bench_with_input(BenchmarkId::new("within_250km", n), &index, |b, idx| {
            b.iter(|| idx.find_all_within_radius(black_box(&query), 250.0).unwrap().len())
        });
        group.bench_with_input(BenchmarkId::new("combined_3_250km", n), &index, |b, idx| {
            b.iter(|| {
                let (within, nearest) = idx
                    .find_k_nearest_and_within_radius(black_box(&query), 3, 250.0)
                    .unwrap();
                within.len() + nearest.len()
            })
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let path = ProximityIndex::default_dataset_path();
    c.bench_function("load_raw_json_bundled", |b| {
        b.iter(|| ProximityIndex::load_raw_json(black_box(&path)).unwrap().len())
    });
}

criterion_group!(benches, bench_queries, bench_load);
criterion_main!(benches);
