//! Performance measurement for grid planning and tile compositing at
//! varying grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use std::hint::black_box;
use tilepreview::grid::{Dimensions, TileConfig, composite, plan};

/// Measures compositing cost as the grid grows from 4 to 400 placements
fn bench_composite(c: &mut Criterion) {
    let tile = RgbaImage::from_pixel(64, 64, Rgba([180, 40, 220, 255]));
    let mut group = c.benchmark_group("composite");

    for grid_side in &[2u32, 5, 10, 20] {
        let config = TileConfig {
            rows: *grid_side,
            cols: *grid_side,
            gap: 1,
        };
        let Ok(grid) = plan(Dimensions::new(64, 64), &config) else {
            group.finish();
            return;
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(grid_side),
            grid_side,
            |b, _| {
                b.iter(|| composite(black_box(&tile), &grid));
            },
        );
    }

    group.finish();
}

/// Measures placement generation alone for a dense grid
fn bench_plan(c: &mut Criterion) {
    let config = TileConfig {
        rows: 100,
        cols: 100,
        gap: 2,
    };

    c.bench_function("plan_100x100", |b| {
        b.iter(|| plan(black_box(Dimensions::new(64, 64)), &config));
    });
}

criterion_group!(benches, bench_composite, bench_plan);
criterion_main!(benches);
