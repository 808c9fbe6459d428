//! Criterion micro-benchmarks for validation and scanning.

use criterion::{criterion_group, criterion_main, Criterion};
use sightline_core::{scan, validate, Grid, Obstacle, Point, Sweep};
use std::hint::black_box;

const CELLS: i64 = 1000;
const CELL_SIZE: i64 = 10;

/// Deterministic pseudo-random obstacle records on a 1000x1000 grid.
fn records(n: u64) -> Vec<[i64; 4]> {
    (0..n)
        .map(|i| {
            let x = (i.wrapping_mul(6364136223846793007) % CELLS as u64) as i64;
            let y = (i.wrapping_mul(1442695040888963407) % CELLS as u64) as i64;
            let w = 1 + (i.wrapping_mul(2862933555777941757) % 8) as i64;
            let h = 1 + (i.wrapping_mul(3202034522624059733) % 8) as i64;
            [
                x * CELL_SIZE,
                y * CELL_SIZE,
                (x + w).min(CELLS) * CELL_SIZE,
                (y + h).min(CELLS) * CELL_SIZE,
            ]
        })
        .collect()
}

/// Benchmark: validate 100K obstacle records.
fn bench_validate_100k(c: &mut Criterion) {
    let grid = Grid::new(CELLS, CELLS, CELL_SIZE).unwrap();
    let recs = records(100_000);
    let robot = Point::new(5000.5, 5000.5);

    c.bench_function("validate_100k", |b| {
        b.iter(|| {
            let obstacles = validate(&grid, &recs, robot).unwrap();
            black_box(obstacles);
        });
    });
}

/// Benchmark: single-pass scan over 100K obstacles.
fn bench_scan_100k(c: &mut Criterion) {
    let grid = Grid::new(CELLS, CELLS, CELL_SIZE).unwrap();
    let robot = Point::new(5000.5, 5000.5);
    let obstacles: Vec<Obstacle> = validate(&grid, &records(100_000), robot).unwrap();

    c.bench_function("scan_100k", |b| {
        b.iter(|| black_box(scan(&grid, black_box(&obstacles), robot)));
    });
}

/// Benchmark: the same scan split into 8 partial sweeps and merged.
fn bench_sweep_merge_8x(c: &mut Criterion) {
    let grid = Grid::new(CELLS, CELLS, CELL_SIZE).unwrap();
    let robot = Point::new(5000.5, 5000.5);
    let obstacles: Vec<Obstacle> = validate(&grid, &records(100_000), robot).unwrap();

    c.bench_function("sweep_merge_8x", |b| {
        b.iter(|| {
            let merged = obstacles
                .chunks(obstacles.len() / 8)
                .map(|chunk| {
                    let mut sweep = Sweep::new(&grid, robot);
                    chunk.iter().for_each(|o| sweep.observe(o));
                    sweep
                })
                .reduce(Sweep::merge)
                .unwrap();
            black_box(merged.finish())
        });
    });
}

criterion_group!(
    benches,
    bench_validate_100k,
    bench_scan_100k,
    bench_sweep_merge_8x
);
criterion_main!(benches);
