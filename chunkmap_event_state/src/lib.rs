// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chunkmap Event State: pointer state that outlives a single event.
//!
//! Panning a map is a three-event gesture: a press records an anchor, each
//! drag event pans by the movement since the previous event, and a release
//! forgets the anchor. [`drag::DragState`] tracks exactly that, so a drag
//! event that arrives without a preceding press does nothing.
//!
//! ```rust
//! use chunkmap_event_state::drag::DragState;
//! use kurbo::{Point, Vec2};
//!
//! let mut drag = DragState::default();
//! assert_eq!(drag.update(Point::new(5.0, 5.0)), None);
//!
//! drag.start(Point::new(0.0, 0.0));
//! assert_eq!(drag.update(Point::new(4.0, -2.0)), Some(Vec2::new(4.0, -2.0)));
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

pub mod drag;
