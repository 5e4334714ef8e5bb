// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chunkmap Render: turns view state into screen-space draw ops.
//!
//! [`GridRenderer`] is a read-only consumer. Given a [`Scene`] (a viewport,
//! the features visible in it and the current selection) it emits, in order:
//!
//! 1. optional [`Overlays`]: tinted quadrants and a highlighted world region,
//! 2. the features: classified cells as filled rectangles, or points as
//!    discs colored by their positional hash,
//! 3. adaptive grid lines whose on-screen spacing stays inside a pixel band,
//! 4. bold axis lines at world `x = 0` and `z = 0`,
//! 5. the selection highlight,
//! 6. integer tick labels (skipping 0), the selection's coordinate text and a
//!    status line with the scale and the world point at the canvas centre.
//!
//! A degenerate viewport (zero-sized canvas) renders nothing.
//!
//! ```rust
//! use chunkmap_imaging::DisplayList;
//! use chunkmap_render::{Features, GridRenderer, Scene};
//! use chunkmap_view2d::Viewport;
//! use kurbo::Rect;
//!
//! let viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let mut list = DisplayList::new();
//! GridRenderer::default().render(&Scene::new(&viewport, Features::None), &mut list);
//! assert!(list.texts().any(|t| t.starts_with("scale: 1.00")));
//! ```

mod grid;
mod renderer;

pub use grid::{GridSpacing, grid_step, ticks};
pub use renderer::{Features, GridRenderer, GridStyle, Highlight, Overlays, Scene};
