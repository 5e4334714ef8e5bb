// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chunkmap_classify::{SlimeClassifier, TileClassifier};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::cell::{Cell, DEFAULT_TILE_SIZE, MAX_CELL_COORD};
use crate::window::{CellWindow, VisibleWindow};

/// Fill color of a matching cell.
pub const MATCH_COLOR: Color = Color::from_rgba8(100, 200, 100, 150);

/// Fill color of a non-matching cell.
pub const NON_MATCH_COLOR: Color = Color::from_rgba8(200, 200, 200, 50);

/// Anything that can supply the features inside a world window.
///
/// Sources are composed into a viewer rather than subclassed: one source per
/// kind of feature. Each call is a fresh, finite query; sources make no
/// promise about ordering.
pub trait VisibleRegionSource {
    /// Feature type produced by the source.
    type Feature;

    /// Calls `f` once for every feature inside `window`.
    fn visit(&self, window: &VisibleWindow, f: &mut dyn FnMut(Self::Feature));

    /// Collects the features inside `window`.
    fn features_in(&self, window: &VisibleWindow) -> Vec<Self::Feature> {
        let mut out = Vec::new();
        self.visit(window, &mut |feature| out.push(feature));
        out
    }
}

/// A classified, colored cell ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkData {
    /// Cell coordinate.
    pub cell: Cell,
    /// World-space rectangle covered by the cell.
    pub rect: Rect,
    /// Classification result.
    pub is_match: bool,
    /// Fill color derived from the classification.
    pub color: Color,
}

/// Classifier-backed source of [`ChunkData`] for every cell in a window.
///
/// Nothing is cached: each query classifies the enumerated cells afresh.
#[derive(Clone, Debug)]
pub struct ChunkSource<C = SlimeClassifier> {
    classifier: C,
    tile_size: f64,
    max_abs: i32,
}

impl<C: TileClassifier> ChunkSource<C> {
    /// Creates a source with the default tile size and coordinate bound.
    #[must_use]
    pub fn new(classifier: C) -> Self {
        Self::with_grid(classifier, DEFAULT_TILE_SIZE, MAX_CELL_COORD)
    }

    /// Creates a source with an explicit tile size and coordinate bound.
    #[must_use]
    pub fn with_grid(classifier: C, tile_size: f64, max_abs: i32) -> Self {
        Self {
            classifier,
            tile_size,
            max_abs,
        }
    }

    /// Returns the classifier.
    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Returns the world-unit edge length of a cell.
    #[must_use]
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Returns the largest absolute cell coordinate the source produces.
    #[must_use]
    pub fn max_abs(&self) -> i32 {
        self.max_abs
    }

    /// Returns the cell window a query over `window` walks.
    #[must_use]
    pub fn cells_for(&self, window: &VisibleWindow) -> CellWindow {
        CellWindow::covering(window, self.tile_size, self.max_abs)
    }

    /// Classifies one cell.
    #[must_use]
    pub fn chunk(&self, cell: Cell) -> ChunkData {
        let is_match = self.classifier.classify(cell.x, cell.z);
        ChunkData {
            cell,
            rect: cell.world_rect(self.tile_size),
            is_match,
            color: if is_match { MATCH_COLOR } else { NON_MATCH_COLOR },
        }
    }
}

impl<C: TileClassifier> VisibleRegionSource for ChunkSource<C> {
    type Feature = ChunkData;

    fn visit(&self, window: &VisibleWindow, f: &mut dyn FnMut(ChunkData)) {
        for cell in self.cells_for(window) {
            f(self.chunk(cell));
        }
    }
}

/// A fixed collection of world points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Adds a point.
    pub fn add(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns all points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl VisibleRegionSource for PointSet {
    type Feature = Point;

    fn visit(&self, window: &VisibleWindow, f: &mut dyn FnMut(Point)) {
        for point in self.points.iter().copied().filter(|p| window.contains(*p)) {
            f(point);
        }
    }
}

/// Adapts a callback `Fn(&VisibleWindow) -> impl IntoIterator<Item = Point>`.
///
/// The callback is trusted to stay inside the window; points it returns
/// outside the window are dropped.
#[derive(Clone, Debug)]
pub struct FnPointSource<F> {
    query: F,
}

impl<F, I> FnPointSource<F>
where
    F: Fn(&VisibleWindow) -> I,
    I: IntoIterator<Item = Point>,
{
    /// Wraps `query`.
    #[must_use]
    pub fn new(query: F) -> Self {
        Self { query }
    }
}

impl<F, I> VisibleRegionSource for FnPointSource<F>
where
    F: Fn(&VisibleWindow) -> I,
    I: IntoIterator<Item = Point>,
{
    type Feature = Point;

    fn visit(&self, window: &VisibleWindow, f: &mut dyn FnMut(Point)) {
        for point in (self.query)(window) {
            if window.contains(point) {
                f(point);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chunkmap_classify::{Seed, SlimeClassifier};
    use kurbo::{Point, Rect};

    use super::{
        ChunkSource, FnPointSource, MATCH_COLOR, NON_MATCH_COLOR, PointSet, VisibleRegionSource,
    };
    use crate::cell::Cell;
    use crate::window::VisibleWindow;

    #[test]
    fn chunk_source_classifies_every_window_cell() {
        let source = ChunkSource::new(SlimeClassifier::new(Seed(0)));
        let window = VisibleWindow::new(-40.0, 8.0, -8.0, 8.0);
        let chunks = source.features_in(&window);
        assert_eq!(chunks.len() as u64, source.cells_for(&window).len());

        let slime = chunks
            .iter()
            .find(|c| c.cell == Cell::new(-2, 0))
            .expect("(-2, 0) is in the window");
        assert!(slime.is_match);
        assert_eq!(slime.color, MATCH_COLOR);
        assert_eq!(slime.rect, Rect::new(-32.0, 0.0, -16.0, 16.0));

        let plain = chunks
            .iter()
            .find(|c| c.cell == Cell::new(0, 0))
            .expect("(0, 0) is in the window");
        assert!(!plain.is_match);
        assert_eq!(plain.color, NON_MATCH_COLOR);
    }

    #[test]
    fn chunk_source_respects_bound() {
        let source = ChunkSource::with_grid(|_: i32, _: i32| true, 16.0, 2);
        let window = VisibleWindow::new(-1000.0, 1000.0, -1000.0, 1000.0);
        let chunks = source.features_in(&window);
        assert_eq!(chunks.len(), 25);
        assert!(chunks.iter().all(|c| c.cell.within(2)));
    }

    #[test]
    fn point_set_filters_by_window() {
        let mut points: PointSet = [Point::new(0.0, 0.0), Point::new(50.0, 0.0)]
            .into_iter()
            .collect();
        points.add(Point::new(-5.0, 5.0));
        let window = VisibleWindow::new(-10.0, 10.0, -10.0, 10.0);
        assert_eq!(
            points.features_in(&window),
            [Point::new(0.0, 0.0), Point::new(-5.0, 5.0)]
        );
        points.clear();
        assert!(points.is_empty());
        assert!(points.features_in(&window).is_empty());
    }

    #[test]
    fn callback_source_drops_points_outside() {
        let source = FnPointSource::new(|w: &VisibleWindow| {
            [Point::new(w.left, w.top), Point::new(w.right + 1.0, w.top)]
        });
        let window = VisibleWindow::new(0.0, 4.0, 0.0, 4.0);
        assert_eq!(source.features_in(&window), [Point::new(0.0, 0.0)]);
    }

    #[test]
    fn sources_are_object_safe() {
        let boxed: Box<dyn VisibleRegionSource<Feature = Point>> =
            Box::new(PointSet::from_iter([Point::new(1.0, 1.0)]));
        let window = VisibleWindow::new(0.0, 2.0, 0.0, 2.0);
        assert_eq!(boxed.features_in(&window).len(), 1);
    }
}
