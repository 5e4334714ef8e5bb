// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Scale used by a fresh viewport and restored by [`Viewport::reset`].
pub const DEFAULT_SCALE: f64 = 1.0;

/// Smallest scale (device pixels per world unit) a viewport allows by default.
pub const MIN_SCALE: f64 = 0.25;

/// Largest scale (device pixels per world unit) a viewport allows by default.
pub const MAX_SCALE: f64 = 16.0;

/// Converts a wheel delta into a multiplicative zoom factor.
///
/// The factor is `base^(-delta)`, so notches compound multiplicatively and a
/// notch forward followed by a notch back returns to the same scale. Negative
/// deltas (wheel away from the user) zoom in.
///
/// Returns `1.0` for non-finite input or a base that is not greater than zero.
#[must_use]
pub fn wheel_zoom_factor(base: f64, delta: f64) -> f64 {
    if !(base > 0.0 && base.is_finite() && delta.is_finite()) {
        return 1.0;
    }
    let factor = base.powf(-delta);
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

/// 2D viewport over the world plane.
///
/// `Viewport` tracks a rectangular region in device/view space (the canvas) and
/// a uniform pan+zoom transform mapping world coordinates into it. The scale is
/// always kept inside `[min_scale, max_scale]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    view_rect: Rect,
    scale: f64,
    offset: Vec2,
    default_scale: f64,
    min_scale: f64,
    max_scale: f64,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport {
    /// Creates a new viewport covering `view_rect` with the default scale range.
    ///
    /// - Initial scale is [`DEFAULT_SCALE`].
    /// - Initial offset is zero (world origin maps to the view rect centre).
    /// - Scale is clamped to `[MIN_SCALE, MAX_SCALE]`.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self::with_scale_limits(view_rect, DEFAULT_SCALE, MIN_SCALE, MAX_SCALE)
    }

    /// Creates a new viewport with an explicit default scale and scale range.
    ///
    /// The range is normalized so that `min <= max`, and the default scale is
    /// clamped into it. Non-finite or non-positive values fall back to the
    /// crate defaults.
    #[must_use]
    pub fn with_scale_limits(view_rect: Rect, default_scale: f64, min: f64, max: f64) -> Self {
        let (min, max) = normalize_limits(min, max);
        let default_scale = if default_scale.is_finite() && default_scale > 0.0 {
            default_scale.clamp(min, max)
        } else {
            DEFAULT_SCALE.clamp(min, max)
        };
        let mut vp = Self {
            view_rect,
            scale: default_scale,
            offset: Vec2::ZERO,
            default_scale,
            min_scale: min,
            max_scale: max,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the current view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in device coordinates.
    ///
    /// Scale and offset are preserved, so the world point at the centre of the
    /// canvas stays the same across a resize.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
    }

    /// Returns `true` when the view rectangle has no area.
    ///
    /// This happens naturally while a window is being created or resized.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.view_rect.width() > 0.0 && self.view_rect.height() > 0.0)
    }

    /// Returns the current uniform scale in device pixels per world unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current offset in world units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the scale restored by [`Viewport::reset`].
    #[must_use]
    pub fn default_scale(&self) -> f64 {
        self.default_scale
    }

    /// Returns the `(min, max)` scale range.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The provided range is normalized so that `min <= max`. The current and
    /// default scales are clamped into the new range.
    pub fn set_scale_limits(&mut self, min: f64, max: f64) {
        let (min, max) = normalize_limits(min, max);
        self.min_scale = min;
        self.max_scale = max;
        self.default_scale = self.default_scale.clamp(min, max);
        self.scale = self.scale.clamp(min, max);
        self.rebuild_transforms();
    }

    /// Sets the scale, clamping it into the configured range.
    ///
    /// Non-finite and non-positive values are ignored. The offset is kept, so
    /// the world point at the canvas centre does not move.
    pub fn set_scale(&mut self, scale: f64) {
        if !(scale.is_finite() && scale > 0.0) {
            return;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return;
        }
        self.scale = clamped;
        self.rebuild_transforms();
    }

    /// Sets the offset in world units. Non-finite offsets are ignored.
    pub fn set_offset(&mut self, offset: Vec2) {
        if !offset.is_finite() || self.offset == offset {
            return;
        }
        self.offset = offset;
        self.rebuild_transforms();
    }

    /// Pans the view by a delta in view/device space.
    ///
    /// The delta is converted to world units (`delta / scale`) and accumulated
    /// into the offset, so the content follows the pointer.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.offset += delta / self.scale;
        self.rebuild_transforms();
    }

    /// Zooms around a given anchor point in view/device coordinates.
    ///
    /// The scale is multiplied by `factor` and clamped; the offset is then
    /// shifted so that the world point under `anchor_view` is the same before
    /// and after the zoom. Non-positive or non-finite factors are ignored.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) || !anchor_view.is_finite() {
            return;
        }
        let new_scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return;
        }

        let before = self.view_to_world_point(anchor_view);
        self.scale = new_scale;
        self.rebuild_transforms();
        let after = self.view_to_world_point(anchor_view);
        self.offset += after - before;
        self.rebuild_transforms();
    }

    /// Restores the default scale and a zero offset.
    pub fn reset(&mut self) {
        self.scale = self.default_scale;
        self.offset = Vec2::ZERO;
        self.rebuild_transforms();
    }

    /// Places `center` at the middle of the canvas and applies `scale`.
    ///
    /// The scale goes through the same clamping as [`Viewport::set_scale`].
    pub fn set_view(&mut self, center: Point, scale: f64) {
        self.set_scale(scale);
        self.center_on(center);
    }

    /// Centres the view on the given world‑space point.
    pub fn center_on(&mut self, world_pt: Point) {
        self.set_offset(-world_pt.to_vec2());
    }

    /// Returns the world point shown at the centre of the view rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        (-self.offset).to_point()
    }

    /// Returns the visible world‑space rectangle.
    ///
    /// `y0`/`y1` are the world `z` values at the top and bottom of the canvas.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world_rect(self.view_rect)
    }

    /// Converts a world‑space point into view/device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view/device‑space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a world‑space rectangle into view/device coordinates.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        self.world_to_view.transform_rect_bbox(rect)
    }

    /// Converts a view/device‑space rectangle into world coordinates.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        self.view_to_world.transform_rect_bbox(rect)
    }

    /// Returns the world → view transform.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        self.world_to_view
    }

    /// Returns the current world‑units‑per‑pixel ratio.
    ///
    /// This is `1.0 / scale` and is handy for sizing strokes and hit radii in
    /// world units.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_rect: self.view_rect,
            visible_world_rect: self.visible_world_rect(),
            center: self.center(),
            scale: self.scale,
            offset: self.offset,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn rebuild_transforms(&mut self) {
        let view_center = self.view_rect.center().to_vec2();
        // World → view: shift by offset, scale, then move the origin to the canvas centre.
        self.world_to_view = Affine::translate(view_center)
            * Affine::scale(self.scale)
            * Affine::translate(self.offset);
        self.view_to_world = self.world_to_view.inverse();
    }
}

fn normalize_limits(min: f64, max: f64) -> (f64, f64) {
    let min = if min.is_finite() && min > 0.0 { min } else { MIN_SCALE };
    let max = if max.is_finite() && max > 0.0 { max } else { MAX_SCALE };
    if min <= max { (min, max) } else { (max, min) }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current view rectangle in device coordinates.
    pub view_rect: Rect,
    /// World‑space rectangle currently visible through the view.
    pub visible_world_rect: Rect,
    /// World point at the centre of the view rectangle.
    pub center: Point,
    /// Current uniform scale.
    pub scale: f64,
    /// Current offset in world units.
    pub offset: Vec2,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
}
