// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use chunkmap_classify::{Seed, SlimeClassifier};
use chunkmap_imaging::DrawSink;
use chunkmap_index::{
    Cell, ChunkData, ChunkSource, PointSet, VisibleRegionSource, VisibleWindow,
    compute_visible_bounds, find_nearest,
};
use chunkmap_render::{Features, GridRenderer, GridStyle, Scene};
use chunkmap_view2d::Viewport;
use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, info, trace, warn};

use crate::config::{ViewerConfig, ViewerMode};
use crate::error::{Result, ViewerError};
use crate::state::{InputEvent, Target, ViewState, reduce};

/// A user-supplied provider of world points for point mode.
pub type BoxedPointSource = Box<dyn VisibleRegionSource<Feature = Point>>;

/// The map viewer core.
///
/// Owns the view state, the seed and the point layer. Windowing code calls
/// these operations from its event handlers and calls [`Viewer::render`]
/// to paint.
pub struct Viewer {
    config: ViewerConfig,
    state: ViewState,
    seed: Seed,
    points: PointSet,
    point_source: Option<BoxedPointSource>,
    renderer: GridRenderer,
}

impl fmt::Debug for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewer")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("seed", &self.seed)
            .field("points", &self.points)
            .field("point_source", &self.point_source.is_some())
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl Viewer {
    /// Creates a viewer over a canvas of `canvas` pixels.
    ///
    /// Fails with [`ViewerError::Config`] when `config` does not validate.
    pub fn new(config: ViewerConfig, canvas: Size, seed: Seed) -> Result<Self> {
        config.validate()?;
        let viewport = Viewport::with_scale_limits(
            canvas.to_rect(),
            config.default_scale,
            config.min_scale,
            config.max_scale,
        );
        let renderer = GridRenderer::new(GridStyle {
            spacing: config.grid_spacing(),
            ..GridStyle::default()
        });
        debug!(mode = ?config.mode, %seed, "viewer created");
        Ok(Self {
            state: ViewState::new(viewport, config.wheel_zoom_base),
            config,
            seed,
            points: PointSet::new(),
            point_source: None,
            renderer,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Returns the view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.state.viewport
    }

    /// Returns the current seed.
    #[must_use]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Returns the selected target, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Target> {
        self.state.selection.get()
    }

    /// Returns the classifier for the current seed.
    #[must_use]
    pub fn classifier(&self) -> SlimeClassifier {
        SlimeClassifier::new(self.seed)
    }

    // --- Viewport ---

    /// Centres the view on `(center_x, center_z)` at `zoom` (clamped).
    pub fn set_viewport(&mut self, center_x: f64, center_z: f64, zoom: f64) {
        self.state.viewport.set_view(Point::new(center_x, center_z), zoom);
    }

    /// Restores the default scale, a zero offset and no selection.
    pub fn reset_viewport(&mut self) {
        self.state.viewport.reset();
        self.state.drag.end();
        self.state.selection.clear();
        info!("viewport reset");
    }

    /// Centres the view on a world point.
    pub fn center_on(&mut self, x: f64, z: f64) {
        self.state.viewport.center_on(Point::new(x, z));
    }

    /// Sets the scale, clamped into the configured range.
    pub fn set_scale(&mut self, scale: f64) {
        self.state.viewport.set_scale(scale);
    }

    /// Sets the world offset directly.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.state.viewport.set_offset(offset);
    }

    /// Resizes the canvas. Zero sizes are allowed and render nothing.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.state
            .viewport
            .set_view_rect(Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0)));
    }

    /// Returns the world rectangle currently on screen.
    #[must_use]
    pub fn visible_window(&self) -> VisibleWindow {
        compute_visible_bounds(&self.state.viewport)
    }

    // --- Selection ---

    /// Selects `target`, replacing any previous selection.
    pub fn select(&mut self, target: Target) {
        if self.state.selection.select_only(target) {
            debug!(selected = ?target, "selected");
        }
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        if let Some(target) = self.state.selection.clear() {
            debug!(previous = ?target, "deselected");
        }
    }

    // --- Input ---

    /// Feeds one pointer event through the reducer.
    pub fn handle(&mut self, event: InputEvent) {
        let next = reduce(self.state.clone(), event, &|state: &ViewState, p: Point| {
            self.hit_test(state, p)
        });
        if next.selection.revision() != self.state.selection.revision() {
            debug!(selection = ?next.selection.get(), "selection changed by click");
        }
        self.state = next;
    }

    /// Returns the target under a view position for `state`'s viewport.
    ///
    /// In chunk mode every in-range position hits the cell under it. In point
    /// mode the first visible point closer than the configured hit radius is
    /// hit.
    #[must_use]
    pub fn hit_test(&self, state: &ViewState, view_pt: Point) -> Option<Target> {
        let vp = &state.viewport;
        if vp.is_degenerate() {
            return None;
        }
        let world = vp.view_to_world_point(view_pt);
        match self.config.mode {
            ViewerMode::Chunks => Cell::containing(world, self.config.tile_size)
                .filter(|cell| cell.within(self.config.max_cell_coord))
                .map(Target::Cell),
            ViewerMode::Points => {
                let threshold = self.config.point_hit_radius * vp.world_units_per_pixel();
                self.points_in(&compute_visible_bounds(vp))
                    .into_iter()
                    .find(|p| p.distance(world) < threshold)
                    .map(Target::Point)
            }
        }
    }

    // --- Search ---

    /// Finds the matching cell nearest to block `(x, z)` and selects it.
    ///
    /// The block position is converted to a cell by dividing toward zero, so
    /// block `-1` searches from cell `0`. Radii above
    /// [`ViewerConfig::max_search_radius`] are rejected. On success the cell
    /// is selected and the view is centred on its centre. On failure nothing
    /// changes.
    pub fn search_nearest(&mut self, x: i64, z: i64, radius: i32) -> Result<Cell> {
        let max = self.config.max_block();
        if x.unsigned_abs() as f64 > max || z.unsigned_abs() as f64 > max {
            warn!(x, z, max, "search target out of range");
            return Err(ViewerError::CoordinateOutOfRange { x, z, max });
        }
        let max_radius = self.config.max_search_radius;
        if radius > max_radius {
            warn!(radius, max_radius, "search radius too large");
            return Err(ViewerError::SearchRadiusTooLarge {
                radius,
                max: max_radius,
            });
        }
        let tile = self.config.tile_size;
        let center = Cell::of_block(x, z, tile).ok_or(ViewerError::CoordinateOutOfRange {
            x,
            z,
            max,
        })?;
        let Some(found) =
            find_nearest(&self.classifier(), center, radius, self.config.max_cell_coord)
        else {
            debug!(x, z, radius, "no match found");
            return Err(ViewerError::NoMatchFound { x, z, radius });
        };
        debug!(x, z, radius, %found, "nearest match");
        self.state.selection.select_only(Target::Cell(found));
        self.state.viewport.center_on(found.center(tile));
        Ok(found)
    }

    // --- Seed ---

    /// Switches to `seed`, clears the selection and centres on cell `(0, 0)`.
    pub fn set_seed(&mut self, seed: impl Into<Seed>) {
        let seed = seed.into();
        self.seed = seed;
        self.state.selection.clear();
        self.state
            .viewport
            .center_on(Cell::new(0, 0).center(self.config.tile_size));
        info!(%seed, "seed updated and view reset to origin");
    }

    /// Parses `text` as a seed and applies it.
    ///
    /// Invalid text is rejected with [`ViewerError::InvalidSeedFormat`] and the
    /// previous seed is kept.
    pub fn set_seed_text(&mut self, text: &str) -> Result<Seed> {
        let seed: Seed = text.parse().map_err(|_| {
            warn!(text, "invalid seed format");
            ViewerError::InvalidSeedFormat {
                text: text.to_owned(),
            }
        })?;
        self.set_seed(seed);
        Ok(seed)
    }

    /// Applies a seed drawn from the operating system's entropy source.
    pub fn randomize_seed(&mut self) -> Result<Seed> {
        let bits = getrandom::u64().map_err(|e| ViewerError::Entropy {
            message: e.to_string(),
        })?;
        let seed = Seed(i64::from_ne_bytes(bits.to_ne_bytes()));
        self.set_seed(seed);
        Ok(seed)
    }

    // --- Points ---

    /// Adds a world point to the point layer.
    pub fn add_point(&mut self, point: Point) {
        self.points.add(point);
    }

    /// Removes every added point and clears a point selection.
    pub fn clear_points(&mut self) {
        self.points.clear();
        if matches!(self.selection(), Some(Target::Point(_))) {
            self.deselect();
        }
    }

    /// Installs an additional point provider, e.g. a callback.
    pub fn set_point_source(&mut self, source: BoxedPointSource) {
        self.point_source = Some(source);
    }

    /// Returns the classified cells inside `window`.
    #[must_use]
    pub fn chunks_in(&self, window: &VisibleWindow) -> Vec<ChunkData> {
        ChunkSource::with_grid(
            self.classifier(),
            self.config.tile_size,
            self.config.max_cell_coord,
        )
        .features_in(window)
    }

    /// Returns the points inside `window`: added points first, then those
    /// from the installed provider.
    #[must_use]
    pub fn points_in(&self, window: &VisibleWindow) -> Vec<Point> {
        let mut points = self.points.features_in(window);
        if let Some(source) = &self.point_source {
            source.visit(window, &mut |p| points.push(p));
        }
        points
    }

    // --- Rendering ---

    /// Paints the current frame into `sink`. Never changes viewer state.
    pub fn render(&self, sink: &mut dyn DrawSink) {
        let window = self.visible_window();
        let (chunks, points) = match self.config.mode {
            ViewerMode::Chunks => (self.chunks_in(&window), Vec::new()),
            ViewerMode::Points => (Vec::new(), self.points_in(&window)),
        };
        let features = match self.config.mode {
            ViewerMode::Chunks => Features::Chunks(&chunks),
            ViewerMode::Points => Features::Points(&points),
        };
        trace!(chunks = chunks.len(), points = points.len(), "render");
        let scene = Scene::new(&self.state.viewport, features)
            .with_highlight(self.selection().copied().map(Into::into))
            .with_overlays(self.config.overlays())
            .with_tile_size(self.config.tile_size);
        self.renderer.render(&scene, sink);
    }
}
