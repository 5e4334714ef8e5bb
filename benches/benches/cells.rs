// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chunkmap_classify::{Seed, SlimeClassifier, TileClassifier};
use chunkmap_index::{
    CellWindow, ChunkSource, DEFAULT_TILE_SIZE, MAX_CELL_COORD, VisibleRegionSource,
    VisibleWindow, enumerate_cells,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn window_of(half_extent: f64) -> VisibleWindow {
    VisibleWindow::new(-half_extent, half_extent, -half_extent, half_extent)
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("cells/enumerate");

    // Half extents in world units: a zoomed-in view up to a fully zoomed-out one.
    for half in [128.0, 512.0, 1_600.0, 3_200.0] {
        let window = window_of(half);
        let count = CellWindow::covering(&window, DEFAULT_TILE_SIZE, MAX_CELL_COORD).len();
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &window, |b, w| {
            b.iter(|| {
                let mut n = 0_u64;
                for cell in enumerate_cells(black_box(w), DEFAULT_TILE_SIZE, MAX_CELL_COORD) {
                    n += u64::from(cell.x != cell.z);
                }
                black_box(n)
            });
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("cells/classify");
    let classifier = SlimeClassifier::new(Seed(-4_172_144_997_902_289_642));

    group.throughput(Throughput::Elements(64 * 64));
    group.bench_function("slime_64x64", |b| {
        b.iter(|| {
            let mut matches = 0_u32;
            for x in -32..32 {
                for z in -32..32 {
                    matches += u32::from(classifier.classify(black_box(x), black_box(z)));
                }
            }
            black_box(matches)
        });
    });

    group.bench_function("slime_far_64x64", |b| {
        b.iter(|| {
            let mut matches = 0_u32;
            for x in 700_000..700_064 {
                for z in -700_064..-700_000 {
                    matches += u32::from(classifier.classify(black_box(x), black_box(z)));
                }
            }
            black_box(matches)
        });
    });

    group.finish();
}

fn bench_chunk_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("cells/chunk_source");
    let source = ChunkSource::new(SlimeClassifier::new(Seed(0)));

    for half in [512.0, 1_600.0] {
        let window = window_of(half);
        group.throughput(Throughput::Elements(source.cells_for(&window).len()));
        group.bench_with_input(BenchmarkId::new("features_in", half), &window, |b, w| {
            b.iter(|| black_box(source.features_in(black_box(w))));
        });
        group.bench_with_input(BenchmarkId::new("visit_count", half), &window, |b, w| {
            b.iter(|| {
                let mut matches = 0_usize;
                source.visit(black_box(w), &mut |chunk| matches += usize::from(chunk.is_match));
                black_box(matches)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_classify, bench_chunk_source);
criterion_main!(benches);
