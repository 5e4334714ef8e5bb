// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chunkmap_classify::point_color;
use chunkmap_imaging::{DrawSink, DrawSinkExt};
use chunkmap_index::{Cell, ChunkData, DEFAULT_TILE_SIZE, VisibleWindow, compute_visible_bounds};
use chunkmap_view2d::Viewport;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;

use crate::grid::{GridSpacing, grid_step, ticks};

/// Labels closer to zero than this are skipped so they do not overlap the axes.
const ZERO_LABEL_EPSILON: f64 = 1e-6;

/// Features drawn under the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Features<'a> {
    /// Nothing but grid, axes and labels.
    #[default]
    None,
    /// Classified cells, drawn as filled rectangles in their own color.
    Chunks(&'a [ChunkData]),
    /// World points, drawn as discs in their positional hash color.
    Points(&'a [Point]),
}

/// The selected target, highlighted on top of the features.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Highlight {
    /// A selected cell.
    Cell(Cell),
    /// A selected world point.
    Point(Point),
}

/// Optional decorations drawn beneath everything else.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Overlays {
    /// Tint the visible parts of quadrants II, III and IV.
    ///
    /// Quadrants are by world sign: II is `x < 0, z > 0`, III is
    /// `x < 0, z < 0` and IV is `x > 0, z < 0`.
    pub quadrant_tint: bool,
    /// World rectangle to shade, e.g. a region of interest.
    pub highlight_region: Option<Rect>,
}

/// Everything one render pass reads.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Current viewport.
    pub viewport: &'a Viewport,
    /// Features inside the visible window.
    pub features: Features<'a>,
    /// Current selection.
    pub highlight: Option<Highlight>,
    /// World-unit edge length of one cell.
    pub tile_size: f64,
    /// Decorations.
    pub overlays: Overlays,
}

impl<'a> Scene<'a> {
    /// Creates a scene with no selection, no overlays and the default tile size.
    #[must_use]
    pub fn new(viewport: &'a Viewport, features: Features<'a>) -> Self {
        Self {
            viewport,
            features,
            highlight: None,
            tile_size: DEFAULT_TILE_SIZE,
            overlays: Overlays::default(),
        }
    }

    /// Sets the selection to highlight.
    #[must_use]
    pub fn with_highlight(mut self, highlight: Option<Highlight>) -> Self {
        self.highlight = highlight;
        self
    }

    /// Sets the decorations.
    #[must_use]
    pub fn with_overlays(mut self, overlays: Overlays) -> Self {
        self.overlays = overlays;
        self
    }

    /// Sets the cell size used for the cell highlight.
    #[must_use]
    pub fn with_tile_size(mut self, tile_size: f64) -> Self {
        self.tile_size = tile_size;
        self
    }
}

/// Colors and sizes used by [`GridRenderer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    /// Grid step search parameters.
    pub spacing: GridSpacing,
    /// Grid line color.
    pub grid_color: Color,
    /// Grid line width in pixels.
    pub grid_width: f64,
    /// Axis line color.
    pub axis_color: Color,
    /// Axis line width in pixels.
    pub axis_width: f64,
    /// Tick label and status line color.
    pub label_color: Color,
    /// Tick label and status line font size in pixels.
    pub font_size: f64,
    /// Selection color: highlight outline, selected point and coordinate text.
    pub selection_color: Color,
    /// Fill laid over a selected cell.
    pub selection_fill: Color,
    /// Point disc diameter in pixels.
    pub point_diameter: f64,
    /// Quadrant tint color.
    pub quadrant_color: Color,
    /// Highlighted region color.
    pub region_color: Color,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            spacing: GridSpacing::default(),
            grid_color: Color::from_rgb8(192, 192, 192),
            grid_width: 1.0,
            axis_color: Color::BLACK,
            axis_width: 2.0,
            label_color: Color::BLACK,
            font_size: 12.0,
            selection_color: Color::from_rgb8(0, 0, 255),
            selection_fill: Color::from_rgba8(0, 0, 255, 60),
            point_diameter: 10.0,
            quadrant_color: Color::from_rgba8(255, 175, 175, 128),
            region_color: Color::from_rgba8(0, 0, 255, 89),
        }
    }
}

/// Read-only renderer for the map plane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridRenderer {
    style: GridStyle,
}

impl GridRenderer {
    /// Creates a renderer with the given style.
    #[must_use]
    pub fn new(style: GridStyle) -> Self {
        Self { style }
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Returns the grid step used at `scale`.
    #[must_use]
    pub fn grid_step(&self, scale: f64) -> Option<f64> {
        grid_step(scale, &self.style.spacing)
    }

    /// Emits a full frame for `scene` into `sink`.
    pub fn render(&self, scene: &Scene<'_>, sink: &mut dyn DrawSink) {
        let vp = scene.viewport;
        let window = compute_visible_bounds(vp);
        if window.is_empty() {
            return;
        }
        self.draw_overlays(vp, &window, &scene.overlays, sink);
        self.draw_features(vp, scene.features, scene.highlight, sink);
        let step = self.grid_step(vp.scale());
        if let Some(step) = step {
            self.draw_grid(vp, &window, step, sink);
        }
        self.draw_axes(vp, &window, sink);
        if let Some(highlight) = scene.highlight {
            self.draw_highlight(vp, highlight, scene.tile_size, sink);
        }
        if let Some(step) = step {
            self.draw_labels(vp, &window, step, sink);
        }
        if let Some(highlight) = scene.highlight {
            self.draw_highlight_text(vp, highlight, scene.tile_size, sink);
        }
        self.draw_status(vp, sink);
    }

    /// Tints quadrants and shades the highlighted region, clipped to `window`.
    pub fn draw_overlays(
        &self,
        vp: &Viewport,
        window: &VisibleWindow,
        overlays: &Overlays,
        sink: &mut dyn DrawSink,
    ) {
        if overlays.quadrant_tint {
            let visible = window.to_rect();
            let quadrants = [
                Rect::new(f64::NEG_INFINITY, 0.0, 0.0, f64::INFINITY),
                Rect::new(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.0, 0.0),
                Rect::new(0.0, f64::NEG_INFINITY, f64::INFINITY, 0.0),
            ];
            let mut first = true;
            for quadrant in quadrants {
                let clipped = visible.intersect(quadrant);
                if clipped.area() > 0.0 {
                    if first {
                        sink.set_color(self.style.quadrant_color);
                        first = false;
                    }
                    sink.fill_rect(vp.world_to_view_rect(clipped));
                }
            }
        }
        if let Some(region) = overlays.highlight_region {
            let clipped = window.to_rect().intersect(region.abs());
            if clipped.area() > 0.0 {
                sink.set_color(self.style.region_color);
                sink.fill_rect(vp.world_to_view_rect(clipped));
            }
        }
    }

    /// Draws classified cells or point discs.
    ///
    /// A selected point is drawn in the selection color instead of its hash
    /// color.
    pub fn draw_features(
        &self,
        vp: &Viewport,
        features: Features<'_>,
        highlight: Option<Highlight>,
        sink: &mut dyn DrawSink,
    ) {
        match features {
            Features::None => {}
            Features::Chunks(chunks) => {
                for chunk in chunks {
                    sink.set_color(chunk.color);
                    sink.fill_rect(vp.world_to_view_rect(chunk.rect));
                }
            }
            Features::Points(points) => {
                let radius = self.style.point_diameter / 2.0;
                for &point in points {
                    let color = if highlight == Some(Highlight::Point(point)) {
                        self.style.selection_color
                    } else {
                        point_color(point.x, point.y)
                    };
                    sink.set_color(color);
                    sink.fill_circle(vp.world_to_view_point(point), radius);
                }
            }
        }
    }

    /// Draws grid lines every `step` world units across `window`.
    pub fn draw_grid(
        &self,
        vp: &Viewport,
        window: &VisibleWindow,
        step: f64,
        sink: &mut dyn DrawSink,
    ) {
        sink.set_color(self.style.grid_color);
        sink.set_stroke_width(self.style.grid_width);
        for x in ticks(window.left, window.right, step) {
            sink.line(
                vp.world_to_view_point(Point::new(x, window.top)),
                vp.world_to_view_point(Point::new(x, window.bottom)),
            );
        }
        for z in ticks(window.top, window.bottom, step) {
            sink.line(
                vp.world_to_view_point(Point::new(window.left, z)),
                vp.world_to_view_point(Point::new(window.right, z)),
            );
        }
    }

    /// Draws the axis lines that cross `window`.
    pub fn draw_axes(&self, vp: &Viewport, window: &VisibleWindow, sink: &mut dyn DrawSink) {
        let shows_x_axis = window.top <= 0.0 && window.bottom >= 0.0;
        let shows_z_axis = window.left <= 0.0 && window.right >= 0.0;
        if !(shows_x_axis || shows_z_axis) {
            return;
        }
        sink.set_color(self.style.axis_color);
        sink.set_stroke_width(self.style.axis_width);
        if shows_x_axis {
            sink.line(
                vp.world_to_view_point(Point::new(window.left, 0.0)),
                vp.world_to_view_point(Point::new(window.right, 0.0)),
            );
        }
        if shows_z_axis {
            sink.line(
                vp.world_to_view_point(Point::new(0.0, window.top)),
                vp.world_to_view_point(Point::new(0.0, window.bottom)),
            );
        }
    }

    /// Outlines the selection.
    ///
    /// Cells get a translucent fill and an outline; points are already drawn
    /// in the selection color by [`GridRenderer::draw_features`].
    pub fn draw_highlight(
        &self,
        vp: &Viewport,
        highlight: Highlight,
        tile_size: f64,
        sink: &mut dyn DrawSink,
    ) {
        if let Highlight::Cell(cell) = highlight {
            let rect = vp.world_to_view_rect(cell.world_rect(tile_size));
            sink.set_color(self.style.selection_fill);
            sink.fill_rect(rect);
            sink.set_color(self.style.selection_color);
            sink.set_stroke_width(self.style.axis_width);
            sink.stroke_rect(rect);
        }
    }

    /// Labels every grid line along both axes, except the one at 0.
    ///
    /// `x` labels sit just below the x axis, `z` labels just right of the z
    /// axis, wherever those axes currently are on screen.
    pub fn draw_labels(
        &self,
        vp: &Viewport,
        window: &VisibleWindow,
        step: f64,
        sink: &mut dyn DrawSink,
    ) {
        sink.set_color(self.style.label_color);
        sink.set_font_size(self.style.font_size);
        for x in ticks(window.left, window.right, step) {
            if x.abs() < ZERO_LABEL_EPSILON {
                continue;
            }
            let p = vp.world_to_view_point(Point::new(x, 0.0));
            sink.text(p + Vec2::new(-10.0, 15.0), format!("{x:.0}"));
        }
        for z in ticks(window.top, window.bottom, step) {
            if z.abs() < ZERO_LABEL_EPSILON {
                continue;
            }
            let p = vp.world_to_view_point(Point::new(0.0, z));
            sink.text(p + Vec2::new(5.0, 5.0), format!("{z:.0}"));
        }
    }

    /// Writes the selection's coordinates next to it.
    pub fn draw_highlight_text(
        &self,
        vp: &Viewport,
        highlight: Highlight,
        tile_size: f64,
        sink: &mut dyn DrawSink,
    ) {
        let (anchor, text) = match highlight {
            Highlight::Cell(cell) => (cell.center(tile_size), format!("chunk {cell}")),
            Highlight::Point(p) => (p, format!("({:.0}, {:.0})", p.x, p.y)),
        };
        let p = vp.world_to_view_point(anchor);
        sink.set_color(self.style.selection_color);
        sink.set_font_size(self.style.font_size);
        sink.text(p + Vec2::new(5.0, -5.0), text);
    }

    /// Writes the scale and the world point at the canvas centre in the
    /// bottom-left corner.
    pub fn draw_status(&self, vp: &Viewport, sink: &mut dyn DrawSink) {
        let center = vp.center();
        let canvas = vp.view_rect();
        sink.set_color(self.style.label_color);
        sink.set_font_size(self.style.font_size);
        sink.text(
            Point::new(canvas.x0 + 10.0, canvas.y1 - 8.0),
            format!(
                "scale: {:.2}  center: ({:.0}, {:.0})",
                vp.scale(),
                center.x + 0.0,
                center.y + 0.0
            ),
        );
    }
}
