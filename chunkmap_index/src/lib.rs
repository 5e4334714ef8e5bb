// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chunkmap Index: windowed spatial queries over the cell grid.
//!
//! The map plane is tiled by axis-aligned square cells of `tile_size` world
//! units. This crate answers the questions a render pass or a search needs:
//!
//! - [`compute_visible_bounds`]: the world rectangle ([`VisibleWindow`]) shown
//!   by a viewport.
//! - [`CellWindow`]: the bounded, inclusive range of cells covering a window,
//!   with a one-cell margin on every side and a hard limit on coordinate
//!   magnitude. Iterating it is lazy and restartable.
//! - [`find_nearest`]: the closest matching cell in a square neighbourhood.
//! - [`VisibleRegionSource`]: a capability trait for anything that can supply
//!   features inside a window, with [`ChunkSource`] (classifier backed),
//!   [`PointSet`] and [`FnPointSource`] as implementations.
//!
//! ## Example
//!
//! ```rust
//! use chunkmap_index::{CellWindow, MAX_CELL_COORD, VisibleWindow};
//!
//! let window = VisibleWindow::new(0.0, 32.0, 0.0, 16.0);
//! let cells = CellWindow::covering(&window, 16.0, MAX_CELL_COORD);
//! // Columns -1..=3 and rows -1..=2 once the margin is added.
//! assert_eq!(cells.len(), 5 * 4);
//! assert_eq!(cells.iter().count(), 20);
//! ```
//!
//! Float inputs are expected to be finite; non-finite windows are treated as
//! empty rather than rejected.

mod cell;
mod search;
mod source;
mod window;

pub use cell::{Cell, DEFAULT_TILE_SIZE, MAX_CELL_COORD};
pub use search::find_nearest;
pub use source::{
    ChunkData, ChunkSource, FnPointSource, MATCH_COLOR, NON_MATCH_COLOR, PointSet,
    VisibleRegionSource,
};
pub use window::{CellWindow, Cells, VisibleWindow, compute_visible_bounds, enumerate_cells};
