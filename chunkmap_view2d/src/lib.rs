// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chunkmap View 2D: the pan/zoom viewport over the infinite map plane.
//!
//! This crate provides a small, headless model of the camera used by the
//! chunk map viewer. It focuses on:
//! - Camera state: a uniform `scale` (device pixels per world unit) and an
//!   `offset` expressed in world units.
//! - Coordinate conversion between world and view/device (pixel) space.
//! - Cursor-anchored zoom with clamping to a configurable scale range.
//!
//! It does **not** own any tiles, points or rendering backend. Callers are
//! expected to derive the visible world rectangle from [`Viewport`] and feed it
//! into a spatial query layer (see `chunkmap_index`).
//!
//! ## Projection
//!
//! The world origin sits at the centre of the view rectangle. Axes are not
//! mirrored: world +x goes right and world +z goes down the screen, which is
//! the usual "north up" map orientation.
//!
//! ```text
//! view = view_center + (world + offset) * scale
//! ```
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use chunkmap_view2d::Viewport;
//!
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! // The canvas centre shows the world origin.
//! let origin = view.view_to_world_point(Point::new(400.0, 300.0));
//! assert!(origin.x.abs() < 1e-9 && origin.y.abs() < 1e-9);
//!
//! // Zoom in around the cursor; the world point under it stays put.
//! let cursor = Point::new(100.0, 50.0);
//! let before = view.view_to_world_point(cursor);
//! view.zoom_about_view_point(cursor, 2.0);
//! let after = view.view_to_world_point(cursor);
//! assert!((before - after).hypot() < 1e-9);
//! ```

mod viewport;

pub use viewport::{
    DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, Viewport, ViewportDebugInfo, wheel_zoom_factor,
};
