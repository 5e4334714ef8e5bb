// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View state and the input reducer.
//!
//! [`ViewState`] is a plain value. Input arrives as [`InputEvent`]s and goes
//! through [`reduce`], which returns the next state; the small transitions it
//! is built from ([`ViewState::pan`], [`ViewState::zoom`],
//! [`ViewState::click`]) are usable on their own.
//!
//! Pointer state machine: a press enters `Dragging`, drag events pan while
//! dragging, and a release or any other event returns to `Idle`. Wheel events
//! zoom about the cursor. Clicks toggle the selection.

use chunkmap_event_state::drag::DragState;
use chunkmap_index::Cell;
use chunkmap_render::Highlight;
use chunkmap_selection::Selection;
use chunkmap_view2d::{Viewport, wheel_zoom_factor};
use kurbo::{Point, Vec2};

/// Something that can be selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    /// A grid cell.
    Cell(Cell),
    /// A world point.
    Point(Point),
}

impl From<Target> for Highlight {
    fn from(target: Target) -> Self {
        match target {
            Target::Cell(cell) => Self::Cell(cell),
            Target::Point(point) => Self::Point(point),
        }
    }
}

/// Pointer input in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Button pressed at a position; anchors a drag.
    Press(Point),
    /// Pointer moved to a position with the button held.
    Drag(Point),
    /// Button released.
    Release(Point),
    /// Wheel rotated by `delta` notches with the cursor at `anchor`.
    ///
    /// Negative deltas (wheel away from the user) zoom in.
    Wheel {
        /// Precise wheel rotation.
        delta: f64,
        /// Cursor position.
        anchor: Point,
    },
    /// Click (press and release without a drag) at a position.
    Click(Point),
}

/// Resolves a click position to the target under it.
pub trait HitTest {
    /// Returns the target under `view_pt`, if any.
    fn hit(&self, state: &ViewState, view_pt: Point) -> Option<Target>;
}

impl<F> HitTest for F
where
    F: Fn(&ViewState, Point) -> Option<Target>,
{
    fn hit(&self, state: &ViewState, view_pt: Point) -> Option<Target> {
        self(state, view_pt)
    }
}

/// Mutable view state owned by a viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Pan/zoom transform and canvas.
    pub viewport: Viewport,
    /// Drag anchor, present between press and release.
    pub drag: DragState,
    /// Current selection.
    pub selection: Selection<Target>,
    /// Base of the wheel zoom factor.
    pub wheel_zoom_base: f64,
}

impl ViewState {
    /// Creates an idle state with nothing selected.
    #[must_use]
    pub fn new(viewport: Viewport, wheel_zoom_base: f64) -> Self {
        Self {
            viewport,
            drag: DragState::default(),
            selection: Selection::new(),
            wheel_zoom_base,
        }
    }

    /// Returns `true` between a press and the event that ends the drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Pans by a view-space delta.
    #[must_use]
    pub fn pan(mut self, delta: Vec2) -> Self {
        self.viewport.pan_by_view(delta);
        self
    }

    /// Zooms by `factor` keeping the world point under `anchor` fixed.
    #[must_use]
    pub fn zoom(mut self, anchor: Point, factor: f64) -> Self {
        self.viewport.zoom_about_view_point(anchor, factor);
        self
    }

    /// Click semantics: a hit toggles that target, a miss deselects.
    #[must_use]
    pub fn click(mut self, target: Option<Target>) -> Self {
        match target {
            Some(target) => {
                self.selection.toggle(target);
            }
            None => {
                self.selection.clear();
            }
        }
        self
    }
}

/// Applies one input event.
///
/// Drag events without a preceding press do nothing. Every event other than
/// a press or a drag ends an active drag.
#[must_use]
pub fn reduce(mut state: ViewState, event: InputEvent, hit: &dyn HitTest) -> ViewState {
    match event {
        InputEvent::Press(pos) => {
            state.drag.start(pos);
            state
        }
        InputEvent::Drag(pos) => match state.drag.update(pos) {
            Some(delta) => state.pan(delta),
            None => state,
        },
        InputEvent::Release(_) => {
            state.drag.end();
            state
        }
        InputEvent::Wheel { delta, anchor } => {
            state.drag.end();
            let factor = wheel_zoom_factor(state.wheel_zoom_base, delta);
            state.zoom(anchor, factor)
        }
        InputEvent::Click(pos) => {
            state.drag.end();
            let target = hit.hit(&state, pos);
            state.click(target)
        }
    }
}
