// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chunkmap_index::{DEFAULT_TILE_SIZE, MAX_CELL_COORD};
use chunkmap_render::{GridSpacing, Overlays};
use chunkmap_view2d::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// What the viewer draws under the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerMode {
    /// Classified cells; clicks select cells.
    #[default]
    Chunks,
    /// Free-standing world points; clicks select the point under the cursor.
    Points,
}

/// World rectangle `[x0, z0, x1, z1]` shaded by [`ViewerConfig::classic`].
pub const CLASSIC_REGION: [f64; 4] = [-512.0, -512.0, 1024.0, 1024.0];

/// Static viewer settings.
///
/// Every field has a default, so a JSON document only needs the fields it
/// overrides. Configuration is never written back by the viewer.
///
/// The defaults draw no overlays. [`ViewerConfig::classic`] turns on the
/// quadrant tint and the [`CLASSIC_REGION`] shading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Feature layer and click semantics.
    pub mode: ViewerMode,
    /// World-unit edge length of one cell.
    pub tile_size: f64,
    /// Largest absolute cell coordinate that is enumerated, searched or selected.
    pub max_cell_coord: i32,
    /// Default nearest-match search radius in cells.
    pub search_radius: i32,
    /// Largest radius a search accepts.
    pub max_search_radius: i32,
    /// Scale restored by a viewport reset.
    pub default_scale: f64,
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Base of the wheel zoom factor `base^(-delta)`.
    pub wheel_zoom_base: f64,
    /// World-unit grid step the adaptive search starts from.
    pub grid_base_step: f64,
    /// Smallest on-screen grid spacing in pixels.
    pub grid_min_pixels: f64,
    /// Largest on-screen grid spacing in pixels.
    pub grid_max_pixels: f64,
    /// Click distance, in pixels, within which a point counts as hit.
    pub point_hit_radius: f64,
    /// Tint quadrants II, III and IV.
    pub quadrant_tint: bool,
    /// World rectangle `[x0, z0, x1, z1]` to shade.
    pub highlight_region: Option<[f64; 4]>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            mode: ViewerMode::Chunks,
            tile_size: DEFAULT_TILE_SIZE,
            max_cell_coord: MAX_CELL_COORD,
            search_radius: 10,
            max_search_radius: 1024,
            default_scale: DEFAULT_SCALE,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            wheel_zoom_base: 1.1,
            grid_base_step: 512.0,
            grid_min_pixels: 30.0,
            grid_max_pixels: 150.0,
            point_hit_radius: 10.0,
            quadrant_tint: false,
            highlight_region: None,
        }
    }
}

impl ViewerConfig {
    /// Defaults plus the quadrant tint and the [`CLASSIC_REGION`] shading.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            quadrant_tint: true,
            highlight_region: Some(CLASSIC_REGION),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings are usable together.
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.tile_size) {
            return Err(ViewerError::config("tile_size must be positive"));
        }
        if self.max_cell_coord < 0 {
            return Err(ViewerError::config("max_cell_coord must not be negative"));
        }
        if !(0..=self.max_search_radius).contains(&self.search_radius) {
            return Err(ViewerError::config(
                "search_radius must lie within [0, max_search_radius]",
            ));
        }
        if !(positive(self.min_scale) && positive(self.max_scale) && self.min_scale <= self.max_scale)
        {
            return Err(ViewerError::config(
                "min_scale and max_scale must be positive with min_scale <= max_scale",
            ));
        }
        if !(self.min_scale..=self.max_scale).contains(&self.default_scale) {
            return Err(ViewerError::config(
                "default_scale must lie within [min_scale, max_scale]",
            ));
        }
        if !positive(self.wheel_zoom_base) {
            return Err(ViewerError::config("wheel_zoom_base must be positive"));
        }
        if !(positive(self.grid_base_step)
            && positive(self.grid_min_pixels)
            && self.grid_min_pixels * 2.0 <= self.grid_max_pixels)
        {
            return Err(ViewerError::config(
                "grid_base_step must be positive and grid_max_pixels at least twice grid_min_pixels",
            ));
        }
        if !(self.point_hit_radius.is_finite() && self.point_hit_radius >= 0.0) {
            return Err(ViewerError::config("point_hit_radius must not be negative"));
        }
        if self
            .highlight_region
            .is_some_and(|r| r.iter().any(|v| !v.is_finite()))
        {
            return Err(ViewerError::config("highlight_region must be finite"));
        }
        Ok(())
    }

    /// Largest absolute block coordinate accepted by a search.
    #[must_use]
    pub fn max_block(&self) -> f64 {
        f64::from(self.max_cell_coord) * self.tile_size
    }

    /// Grid spacing parameters for the renderer.
    #[must_use]
    pub fn grid_spacing(&self) -> GridSpacing {
        GridSpacing {
            base_step: self.grid_base_step,
            min_pixels: self.grid_min_pixels,
            max_pixels: self.grid_max_pixels,
        }
    }

    /// Decorations for the renderer.
    #[must_use]
    pub fn overlays(&self) -> Overlays {
        Overlays {
            quadrant_tint: self.quadrant_tint,
            highlight_region: self
                .highlight_region
                .map(|[x0, z0, x1, z1]| Rect::new(x0, z0, x1, z1)),
        }
    }
}
