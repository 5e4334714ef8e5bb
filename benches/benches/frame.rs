// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chunkmap_classify::{Seed, SlimeClassifier};
use chunkmap_imaging::DisplayList;
use chunkmap_index::{Cell, ChunkSource, PointSet, VisibleRegionSource, compute_visible_bounds};
use chunkmap_render::{Features, GridRenderer, GridStyle, Highlight, Scene};
use chunkmap_view2d::Viewport;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};

fn viewport_at(scale: f64) -> Viewport {
    let mut vp = Viewport::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
    vp.set_view(Point::new(8.0, 8.0), scale);
    vp
}

fn bench_chunk_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/chunks");
    let renderer = GridRenderer::new(GridStyle::default());
    let source = ChunkSource::new(SlimeClassifier::new(Seed(0)));

    for scale in [0.25, 1.0, 4.0, 16.0] {
        let vp = viewport_at(scale);
        let chunks = source.features_in(&compute_visible_bounds(&vp));
        group.bench_with_input(BenchmarkId::from_parameter(scale), &chunks, |b, chunks| {
            b.iter_batched(
                DisplayList::new,
                |mut list| {
                    let scene = Scene::new(&vp, Features::Chunks(chunks))
                        .with_highlight(Some(Highlight::Cell(Cell::new(0, 0))));
                    renderer.render(&scene, &mut list);
                    black_box(list)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_point_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/points");
    let renderer = GridRenderer::new(GridStyle::default());
    let vp = viewport_at(1.0);

    for n in [100_u32, 1_000, 10_000] {
        let points: PointSet = (0..n)
            .map(|i| {
                let t = f64::from(i);
                Point::new((t * 7.3) % 1200.0 - 600.0, (t * 3.1) % 700.0 - 350.0)
            })
            .collect();
        let visible = points.features_in(&compute_visible_bounds(&vp));
        group.bench_with_input(BenchmarkId::from_parameter(n), &visible, |b, visible| {
            b.iter_batched(
                DisplayList::new,
                |mut list| {
                    renderer.render(&Scene::new(&vp, Features::Points(visible)), &mut list);
                    black_box(list)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chunk_frame, bench_point_frame);
criterion_main!(benches);
