// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chunkmap_classify::{Seed, SlimeClassifier};
use chunkmap_index::{Cell, MAX_CELL_COORD, find_nearest};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_find_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("search/find_nearest");
    let classifier = SlimeClassifier::new(Seed(123_456_789));

    // A miss scans the full square, so `never` gives the worst case per radius.
    let never = |_: i32, _: i32| false;
    for radius in [2, 10, 32] {
        group.bench_with_input(BenchmarkId::new("slime", radius), &radius, |b, &r| {
            b.iter(|| {
                black_box(find_nearest(
                    &classifier,
                    black_box(Cell::new(-1, -1)),
                    r,
                    MAX_CELL_COORD,
                ))
            });
        });
        group.bench_with_input(BenchmarkId::new("miss", radius), &radius, |b, &r| {
            b.iter(|| {
                black_box(find_nearest(
                    &never,
                    black_box(Cell::new(0, 0)),
                    r,
                    MAX_CELL_COORD,
                ))
            });
        });
    }

    group.bench_function("at_bound", |b| {
        b.iter(|| {
            black_box(find_nearest(
                &classifier,
                black_box(Cell::new(MAX_CELL_COORD, -MAX_CELL_COORD)),
                10,
                MAX_CELL_COORD,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_find_nearest);
criterion_main!(benches);
