// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag anchor tracking: movement deltas between pointer events.
//!
//! ## Usage
//!
//! 1) On pointer press, call [`DragState::start`] with the press position.
//! 2) On each drag event, call [`DragState::update`]; pan by the returned delta.
//! 3) [`DragState::total_offset`] reports how far the pointer moved overall,
//!    which hosts use to tell a click from a short drag.
//! 4) On release, call [`DragState::end`].

use kurbo::{Point, Vec2};

/// Anchor state of an in-progress drag, in view coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    start: Option<Point>,
    last: Option<Point>,
}

impl DragState {
    /// Records the press position as the anchor of a new drag.
    ///
    /// A press during an active drag restarts it from `pos`.
    pub fn start(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
    }

    /// Moves the anchor to `pos`, returning the movement since the last
    /// event, or `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    /// Returns the offset of `pos` from the press position.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start.map(|start| pos - start)
    }

    /// Forgets the anchor.
    pub fn end(&mut self) {
        self.start = None;
        self.last = None;
    }

    /// Returns `true` between a press and its release.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Returns the press position of the active drag.
    #[must_use]
    pub fn start_pos(&self) -> Option<Point> {
        self.start
    }

    /// Returns the most recent anchor position of the active drag.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last
    }
}
