// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;

use chunkmap_view2d::Viewport;
use kurbo::{Point, Rect};

use crate::cell::Cell;

/// World-space rectangle shown by the viewport during one render pass.
///
/// `top` and `bottom` are the world `z` values at the top and bottom edges of
/// the canvas, so `top <= bottom` for a non-empty window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleWindow {
    /// Smallest visible world x.
    pub left: f64,
    /// Largest visible world x.
    pub right: f64,
    /// Smallest visible world z.
    pub top: f64,
    /// Largest visible world z.
    pub bottom: f64,
}

impl VisibleWindow {
    /// A window that contains nothing.
    pub const EMPTY: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    /// Creates a window from its edges.
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Creates a window from a world-space rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.x1, rect.y0, rect.y1)
    }

    /// Returns the window as a world-space rectangle.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    /// Returns `true` if the window has no area or any edge is not finite.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let finite = self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite();
        !(finite && self.right > self.left && self.bottom > self.top)
    }

    /// Returns `true` if `p` lies inside the window, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        !self.is_empty()
            && p.x >= self.left
            && p.x <= self.right
            && p.y >= self.top
            && p.y <= self.bottom
    }
}

/// Returns the world rectangle currently shown by `viewport`.
///
/// A zero-sized canvas or a non-finite transform yields
/// [`VisibleWindow::EMPTY`].
#[must_use]
pub fn compute_visible_bounds(viewport: &Viewport) -> VisibleWindow {
    if viewport.is_degenerate() || !viewport.scale().is_finite() {
        return VisibleWindow::EMPTY;
    }
    let window = VisibleWindow::from_rect(viewport.visible_world_rect());
    if window.is_empty() {
        VisibleWindow::EMPTY
    } else {
        window
    }
}

/// Inclusive, bounded range of cells.
///
/// The range is stored as corners so it is `Copy`; every call to
/// [`CellWindow::iter`] starts a fresh, lazy, row-major walk (`x` outer,
/// `z` inner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellWindow {
    min: Cell,
    max: Cell,
}

impl CellWindow {
    /// A window that yields no cells.
    pub const EMPTY: Self = Self {
        min: Cell::new(0, 0),
        max: Cell::new(-1, -1),
    };

    /// Creates the inclusive range `min..=max` on both axes.
    ///
    /// If `min` exceeds `max` on either axis, the window is empty.
    #[must_use]
    pub fn new(min: Cell, max: Cell) -> Self {
        if min.x > max.x || min.z > max.z {
            Self::EMPTY
        } else {
            Self { min, max }
        }
    }

    /// Returns the cells to classify for `window`.
    ///
    /// The index range is `floor(left / t) - 1 ..= ceil(right / t) + 1` (and
    /// likewise for `top`/`bottom`), so cells sliding in at the edges while
    /// panning are already present. The range is then limited to
    /// `[-max_abs, max_abs]`; cells beyond that are skipped, which bounds the
    /// work when the view is zoomed far out.
    ///
    /// Empty or non-finite windows, non-positive tile sizes and a negative
    /// `max_abs` all yield [`CellWindow::EMPTY`].
    #[must_use]
    pub fn covering(window: &VisibleWindow, tile_size: f64, max_abs: i32) -> Self {
        if window.is_empty() || !(tile_size.is_finite() && tile_size > 0.0) || max_abs < 0 {
            return Self::EMPTY;
        }
        let bound = f64::from(max_abs);
        let (Some((min_x, max_x)), Some((min_z, max_z))) = (
            axis_range(window.left, window.right, tile_size, bound),
            axis_range(window.top, window.bottom, tile_size, bound),
        ) else {
            return Self::EMPTY;
        };
        Self::new(Cell::new(min_x, min_z), Cell::new(max_x, max_z))
    }

    /// Returns `true` if the window yields no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.z > self.max.z
    }

    /// Number of cells in the window.
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let columns = i64::from(self.max.x) - i64::from(self.min.x) + 1;
        let rows = i64::from(self.max.z) - i64::from(self.min.z) + 1;
        columns.unsigned_abs() * rows.unsigned_abs()
    }

    /// Returns the minimum corner, or `None` when empty.
    #[must_use]
    pub fn min(&self) -> Option<Cell> {
        (!self.is_empty()).then_some(self.min)
    }

    /// Returns the maximum corner, or `None` when empty.
    #[must_use]
    pub fn max(&self) -> Option<Cell> {
        (!self.is_empty()).then_some(self.max)
    }

    /// Returns `true` if `cell` lies inside the window.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        !self.is_empty()
            && (self.min.x..=self.max.x).contains(&cell.x)
            && (self.min.z..=self.max.z).contains(&cell.z)
    }

    /// Starts a new row-major walk over the window.
    #[must_use]
    pub fn iter(&self) -> Cells {
        Cells {
            window: *self,
            next: self.min(),
        }
    }
}

impl IntoIterator for CellWindow {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

impl IntoIterator for &CellWindow {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

/// Lazy row-major iterator over a [`CellWindow`].
#[derive(Clone, Debug)]
pub struct Cells {
    window: CellWindow,
    next: Option<Cell>,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let current = self.next?;
        let CellWindow { min, max } = self.window;
        self.next = if current.z < max.z {
            Some(Cell::new(current.x, current.z + 1))
        } else if current.x < max.x {
            Some(Cell::new(current.x + 1, min.z))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(current) = self.next else {
            return (0, Some(0));
        };
        let CellWindow { min, max } = self.window;
        let rows = i64::from(max.z) - i64::from(min.z) + 1;
        let full_columns = i64::from(max.x) - i64::from(current.x);
        let in_column = i64::from(max.z) - i64::from(current.z) + 1;
        let remaining = full_columns * rows + in_column;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Cells {}

/// Enumerates the cells to classify for `bounds`.
///
/// Shorthand for `CellWindow::covering(bounds, tile_size, max_abs).iter()`.
#[must_use]
pub fn enumerate_cells(bounds: &VisibleWindow, tile_size: f64, max_abs: i32) -> Cells {
    CellWindow::covering(bounds, tile_size, max_abs).iter()
}

fn axis_range(lo: f64, hi: f64, tile_size: f64, bound: f64) -> Option<(i32, i32)> {
    let first = (lo / tile_size).floor() - 1.0;
    let last = (hi / tile_size).ceil() + 1.0;
    if !(first.is_finite() && last.is_finite()) || first > bound || last < -bound {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "both ends are integral and clamped into the i32 bound"
    )]
    let range = (first.max(-bound) as i32, last.min(bound) as i32);
    Some(range)
}

#[cfg(test)]
mod tests {
    use chunkmap_view2d::Viewport;
    use kurbo::Rect;

    use super::{CellWindow, VisibleWindow, compute_visible_bounds, enumerate_cells};
    use crate::cell::{Cell, MAX_CELL_COORD};

    #[test]
    fn visible_bounds_follow_viewport() {
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, 320.0, 160.0));
        vp.set_scale(2.0);
        let window = compute_visible_bounds(&vp);
        assert_eq!(window, VisibleWindow::new(-80.0, 80.0, -40.0, 40.0));
    }

    #[test]
    fn degenerate_viewport_yields_nothing() {
        let vp = Viewport::new(Rect::new(0.0, 0.0, 0.0, 600.0));
        let window = compute_visible_bounds(&vp);
        assert!(window.is_empty());
        assert_eq!(enumerate_cells(&window, 16.0, MAX_CELL_COORD).count(), 0);
    }

    #[test]
    fn margin_of_one_cell() {
        let window = VisibleWindow::new(-8.0, 8.0, 0.0, 32.0);
        let cells = CellWindow::covering(&window, 16.0, MAX_CELL_COORD);
        assert_eq!(cells.min(), Some(Cell::new(-2, -1)));
        assert_eq!(cells.max(), Some(Cell::new(2, 3)));
        assert_eq!(cells.len(), 25);
    }

    #[test]
    fn row_major_order_and_restartable() {
        let cells = CellWindow::new(Cell::new(0, 0), Cell::new(1, 2));
        let first: Vec<_> = cells.iter().collect();
        assert_eq!(
            first,
            [
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
            ]
        );
        let second: Vec<_> = cells.into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn size_hint_is_exact() {
        let cells = CellWindow::new(Cell::new(-3, 5), Cell::new(4, 9));
        let mut iter = cells.iter();
        assert_eq!(iter.size_hint(), (40, Some(40)));
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (38, Some(38)));
        assert_eq!(iter.count(), 38);
    }

    #[test]
    fn cells_beyond_bound_are_skipped() {
        let window = VisibleWindow::new(-1.0e9, 1.0e9, -10.0, 10.0);
        let cells = CellWindow::covering(&window, 16.0, 100);
        assert_eq!(cells.min(), Some(Cell::new(-100, -2)));
        assert_eq!(cells.max(), Some(Cell::new(100, 2)));

        let far = VisibleWindow::new(1.0e9, 1.0e9 + 64.0, 0.0, 64.0);
        assert!(CellWindow::covering(&far, 16.0, MAX_CELL_COORD).is_empty());
    }

    #[test]
    fn invalid_parameters_are_empty() {
        let window = VisibleWindow::new(0.0, 10.0, 0.0, 10.0);
        assert!(CellWindow::covering(&window, 0.0, 10).is_empty());
        assert!(CellWindow::covering(&window, f64::NAN, 10).is_empty());
        assert!(CellWindow::covering(&window, 16.0, -1).is_empty());
        let nan = VisibleWindow::new(f64::NAN, 10.0, 0.0, 10.0);
        assert!(CellWindow::covering(&nan, 16.0, 10).is_empty());
        assert_eq!(CellWindow::EMPTY.iter().next(), None);
        assert_eq!(CellWindow::EMPTY.len(), 0);
    }

    #[test]
    fn window_contains_points() {
        let window = VisibleWindow::new(-1.0, 1.0, -2.0, 2.0);
        assert!(window.contains(kurbo::Point::new(0.0, 2.0)));
        assert!(!window.contains(kurbo::Point::new(1.5, 0.0)));
        assert_eq!(window.to_rect(), Rect::new(-1.0, -2.0, 1.0, 2.0));
    }
}
