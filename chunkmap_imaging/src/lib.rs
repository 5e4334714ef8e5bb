// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chunkmap Imaging: a screen-space draw IR and a recording sink.
//!
//! The map renderer never talks to a canvas directly. It emits a stream of
//! [`ImagingOp`]s into anything implementing [`DrawSink`]:
//!
//! - [`StateOp`] changes the current color, stroke width or font size.
//! - [`DrawOp`] draws with the current state: lines, filled and stroked
//!   rectangles, filled circles and text runs.
//!
//! All geometry is in view (pixel) coordinates; there is no transform stack.
//! A windowing layer implements [`DrawSink`] on top of its 2D canvas. For
//! tests and headless use, [`DisplayList`] records every op together with the
//! state it was drawn with.
//!
//! # Example
//!
//! ```rust
//! use chunkmap_imaging::{DisplayList, DrawOp, DrawSinkExt};
//! use kurbo::Rect;
//! use peniko::Color;
//!
//! let mut list = DisplayList::new();
//! list.set_color(Color::from_rgb8(255, 0, 0));
//! list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
//!
//! let draws: Vec<_> = list.draws().collect();
//! assert_eq!(draws.len(), 1);
//! assert_eq!(draws[0].op, &DrawOp::FillRect(Rect::new(0.0, 0.0, 10.0, 10.0)));
//! assert_eq!(draws[0].state.color, Color::from_rgb8(255, 0, 0));
//! ```

use kurbo::{Circle, Line, Point, Rect};
use peniko::Color;

/// Operations that change the drawing state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StateOp {
    /// Set the color used by every subsequent draw.
    SetColor(Color),
    /// Set the width, in pixels, of subsequent lines and stroked rectangles.
    SetStrokeWidth(f64),
    /// Set the font size, in pixels, of subsequent text.
    SetFontSize(f64),
}

/// Operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke a line segment.
    Line(Line),
    /// Fill an axis-aligned rectangle.
    FillRect(Rect),
    /// Stroke the outline of an axis-aligned rectangle.
    StrokeRect(Rect),
    /// Fill a circle.
    FillCircle(Circle),
    /// Draw a run of text with its baseline starting at `origin`.
    Text {
        /// Baseline origin of the first glyph.
        origin: Point,
        /// Text to draw.
        text: String,
    },
}

/// Unified operation as recorded in a [`DisplayList`].
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Drawing state in effect when a [`DrawOp`] is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    /// Current color.
    pub color: Color,
    /// Current stroke width in pixels.
    pub stroke_width: f64,
    /// Current font size in pixels.
    pub font_size: f64,
}

impl DrawState {
    /// State at the start of every frame: opaque black, 1px strokes, 12px text.
    pub const INITIAL: Self = Self {
        color: Color::BLACK,
        stroke_width: 1.0,
        font_size: 12.0,
    };

    /// Applies `op` to this state.
    pub fn apply(&mut self, op: StateOp) {
        match op {
            StateOp::SetColor(color) => self.color = color,
            StateOp::SetStrokeWidth(width) => self.stroke_width = width,
            StateOp::SetFontSize(size) => self.font_size = size,
        }
    }
}

impl Default for DrawState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Consumer of imaging operations, e.g. a canvas adapter or a recorder.
///
/// The trait is object safe so renderers can take `&mut dyn DrawSink`.
pub trait DrawSink {
    /// Applies a state operation.
    fn state(&mut self, op: StateOp);

    /// Applies a draw operation with the current state.
    fn draw(&mut self, op: DrawOp);
}

/// Convenience helpers over [`DrawSink`].
///
/// Kept separate so the core trait stays minimal; implemented for every sink,
/// including `dyn DrawSink`.
pub trait DrawSinkExt: DrawSink {
    /// Sets the current color.
    fn set_color(&mut self, color: Color) {
        self.state(StateOp::SetColor(color));
    }

    /// Sets the current stroke width.
    fn set_stroke_width(&mut self, width: f64) {
        self.state(StateOp::SetStrokeWidth(width));
    }

    /// Sets the current font size.
    fn set_font_size(&mut self, size: f64) {
        self.state(StateOp::SetFontSize(size));
    }

    /// Strokes the segment from `p0` to `p1`.
    fn line(&mut self, p0: Point, p1: Point) {
        self.draw(DrawOp::Line(Line::new(p0, p1)));
    }

    /// Fills `rect`.
    fn fill_rect(&mut self, rect: Rect) {
        self.draw(DrawOp::FillRect(rect));
    }

    /// Strokes the outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect) {
        self.draw(DrawOp::StrokeRect(rect));
    }

    /// Fills a circle of `radius` around `center`.
    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.draw(DrawOp::FillCircle(Circle::new(center, radius)));
    }

    /// Draws `text` with its baseline at `origin`.
    fn text(&mut self, origin: Point, text: impl Into<String>) {
        self.draw(DrawOp::Text {
            origin,
            text: text.into(),
        });
    }
}

impl<S: DrawSink + ?Sized> DrawSinkExt for S {}

/// One recorded draw together with the state it was drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyledDraw<'a> {
    /// The draw operation.
    pub op: &'a DrawOp,
    /// State in effect when the op was applied.
    pub state: DrawState,
}

/// Recording [`DrawSink`] for tests and headless rendering.
///
/// Ops are stored in application order. The list does not rasterize.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<ImagingOp>,
}

impl DisplayList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Returns every recorded op.
    #[must_use]
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Returns the number of recorded ops, state ops included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drops every recorded op.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Replays the draw ops, resolving the state each one was drawn with.
    ///
    /// State starts from [`DrawState::INITIAL`].
    pub fn draws(&self) -> impl Iterator<Item = StyledDraw<'_>> + '_ {
        let mut state = DrawState::INITIAL;
        self.ops.iter().filter_map(move |op| match op {
            ImagingOp::State(op) => {
                state.apply(*op);
                None
            }
            ImagingOp::Draw(op) => Some(StyledDraw { op, state }),
        })
    }

    /// Returns the text of every [`DrawOp::Text`] in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            ImagingOp::Draw(DrawOp::Text { text, .. }) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replays the recorded ops into another sink.
    pub fn replay(&self, sink: &mut dyn DrawSink) {
        for op in &self.ops {
            match op {
                ImagingOp::State(op) => sink.state(*op),
                ImagingOp::Draw(op) => sink.draw(op.clone()),
            }
        }
    }
}

impl DrawSink for DisplayList {
    fn state(&mut self, op: StateOp) {
        self.ops.push(ImagingOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Circle, Line, Point, Rect};
    use peniko::Color;

    use super::{DisplayList, DrawOp, DrawSink, DrawSinkExt, DrawState, ImagingOp, StateOp};

    #[test]
    fn draws_resolve_state_in_order() {
        let mut list = DisplayList::new();
        list.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        list.set_color(Color::WHITE);
        list.set_stroke_width(2.0);
        list.stroke_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
        list.set_font_size(14.0);
        list.text(Point::new(3.0, 4.0), "hi");

        let draws: Vec<_> = list.draws().collect();
        assert_eq!(draws.len(), 3);
        assert_eq!(draws[0].state, DrawState::INITIAL);
        assert_eq!(
            draws[0].op,
            &DrawOp::Line(Line::new((0.0, 0.0), (1.0, 1.0)))
        );
        assert_eq!(draws[1].state.color, Color::WHITE);
        assert_eq!(draws[1].state.stroke_width, 2.0);
        assert_eq!(draws[2].state.font_size, 14.0);
        assert_eq!(list.texts().collect::<Vec<_>>(), ["hi"]);
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn dyn_sink_gets_helpers() {
        let mut list = DisplayList::new();
        let sink: &mut dyn DrawSink = &mut list;
        sink.fill_circle(Point::new(5.0, 5.0), 5.0);
        assert_eq!(
            list.ops(),
            [ImagingOp::Draw(DrawOp::FillCircle(Circle::new((5.0, 5.0), 5.0)))]
        );
    }

    #[test]
    fn replay_copies_ops() {
        let mut list = DisplayList::new();
        list.state(StateOp::SetColor(Color::BLACK));
        list.fill_rect(Rect::new(1.0, 2.0, 3.0, 4.0));
        let mut copy = DisplayList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.draws().count(), 0);
    }
}
