// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chunkmap: an interactive map of slime chunks.
//!
//! The plane is tiled by 16×16 block cells ("chunks"). For a 64-bit world
//! seed, each chunk is deterministically classified as a slime chunk or not.
//! [`Viewer`] ties the pieces together:
//!
//! - a pan/zoom [`Viewport`] driven by pointer [`InputEvent`]s through a
//!   single [`reduce`] function over a plain [`ViewState`],
//! - a single-target selection toggled by clicks,
//! - a bounded nearest slime chunk search from a block coordinate,
//! - seed changes from numbers, text or the OS entropy source,
//! - read-only rendering into any [`DrawSink`].
//!
//! Window chrome, text fields and the event loop live outside this crate; they
//! call the operations on [`Viewer`] and implement [`DrawSink`] for their
//! canvas.
//!
//! ## Example
//!
//! ```rust
//! use chunkmap::{Cell, DisplayList, Seed, Target, Viewer, ViewerConfig};
//! use kurbo::Size;
//!
//! let mut viewer = Viewer::new(ViewerConfig::default(), Size::new(800.0, 600.0), Seed(0))?;
//!
//! let found = viewer.search_nearest(0, 0, 10)?;
//! assert_eq!(found, Cell::new(-2, 0));
//! assert_eq!(viewer.selection(), Some(&Target::Cell(found)));
//!
//! let mut frame = DisplayList::new();
//! viewer.render(&mut frame);
//! assert!(frame.texts().any(|t| t == "chunk (-2, 0)"));
//! # Ok::<(), chunkmap::ViewerError>(())
//! ```

mod config;
mod error;
mod state;
mod viewer;

pub use config::{CLASSIC_REGION, ViewerConfig, ViewerMode};
pub use error::{Result, ViewerError};
pub use state::{HitTest, InputEvent, Target, ViewState, reduce};
pub use viewer::{BoxedPointSource, Viewer};

pub use chunkmap_classify::Seed;
pub use chunkmap_imaging::{DisplayList, DrawSink};
pub use chunkmap_index::Cell;
pub use chunkmap_view2d::Viewport;
