// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect};

/// World-unit edge length of one cell unless configured otherwise.
pub const DEFAULT_TILE_SIZE: f64 = 16.0;

/// Largest supported absolute cell coordinate.
///
/// Cells beyond this on either axis are never enumerated, searched or
/// selected.
pub const MAX_CELL_COORD: i32 = 784_426;

/// Integer coordinate of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index along world x.
    pub x: i32,
    /// Row index along world z.
    pub z: i32,
}

impl Cell {
    /// Creates a cell coordinate.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Returns the cell containing `world`, or `None` for non-finite points or
    /// points whose cell index does not fit in `i32`.
    #[must_use]
    pub fn containing(world: Point, tile_size: f64) -> Option<Self> {
        Some(Self {
            x: cell_index(world.x, tile_size, f64::floor)?,
            z: cell_index(world.y, tile_size, f64::floor)?,
        })
    }

    /// Returns the cell a block position names, dividing toward zero.
    ///
    /// Unlike [`Cell::containing`], block `-1` maps to cell `0`. This is the
    /// block-to-chunk rule search targets use.
    #[must_use]
    pub fn of_block(x: i64, z: i64, tile_size: f64) -> Option<Self> {
        Some(Self {
            x: cell_index(x as f64, tile_size, f64::trunc)?,
            z: cell_index(z as f64, tile_size, f64::trunc)?,
        })
    }

    /// Returns `true` if neither coordinate exceeds `max_abs` in magnitude.
    #[must_use]
    pub fn within(self, max_abs: i32) -> bool {
        let max_abs = i64::from(max_abs);
        i64::from(self.x).abs() <= max_abs && i64::from(self.z).abs() <= max_abs
    }

    /// Returns the world-space minimum corner of the cell.
    #[must_use]
    pub fn origin(self, tile_size: f64) -> Point {
        Point::new(f64::from(self.x) * tile_size, f64::from(self.z) * tile_size)
    }

    /// Returns the world-space rectangle covered by the cell.
    #[must_use]
    pub fn world_rect(self, tile_size: f64) -> Rect {
        let origin = self.origin(tile_size);
        Rect::new(origin.x, origin.y, origin.x + tile_size, origin.y + tile_size)
    }

    /// Returns the world-space centre of the cell.
    #[must_use]
    pub fn center(self, tile_size: f64) -> Point {
        self.world_rect(tile_size).center()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

fn cell_index(v: f64, tile_size: f64, round: fn(f64) -> f64) -> Option<i32> {
    if !(v.is_finite() && tile_size.is_finite() && tile_size > 0.0) {
        return None;
    }
    let index = round(v / tile_size);
    if index < f64::from(i32::MIN) || index > f64::from(i32::MAX) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "range checked above and already integral"
    )]
    let index = index as i32;
    Some(index)
}
