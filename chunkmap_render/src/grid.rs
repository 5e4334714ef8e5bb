// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter;

/// Target band for on-screen grid spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpacing {
    /// World-unit step the search starts from.
    pub base_step: f64,
    /// Smallest acceptable spacing in pixels.
    pub min_pixels: f64,
    /// Largest acceptable spacing in pixels.
    pub max_pixels: f64,
}

impl Default for GridSpacing {
    fn default() -> Self {
        Self {
            base_step: 512.0,
            min_pixels: 30.0,
            max_pixels: 150.0,
        }
    }
}

// Each loop halves or doubles, so this bounds them well past f64's exponent range.
const MAX_STEP_ITERATIONS: u32 = 2100;

/// Picks the world-unit grid step for `scale`.
///
/// Starting from `spacing.base_step`, the step is doubled while its projected
/// spacing is below `min_pixels`, then halved while it is above `max_pixels`.
/// Returns `None` for a non-finite or non-positive scale or base step.
#[must_use]
pub fn grid_step(scale: f64, spacing: &GridSpacing) -> Option<f64> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !(valid(scale) && valid(spacing.base_step)) {
        return None;
    }
    let mut step = spacing.base_step;
    for _ in 0..MAX_STEP_ITERATIONS {
        if step * scale >= spacing.min_pixels {
            break;
        }
        step *= 2.0;
    }
    for _ in 0..MAX_STEP_ITERATIONS {
        if step * scale <= spacing.max_pixels {
            break;
        }
        step /= 2.0;
    }
    valid(step).then_some(step)
}

// Upper bound on ticks per call, far above any canvas at the minimum spacing.
const MAX_TICKS: f64 = 65_536.0;

/// Yields the multiples of `step` from `floor(lo / step) * step` up to `hi`.
///
/// The first tick may lie just below `lo` so a line at the window edge is not
/// lost. Nothing is yielded for invalid input, or when tick indices around
/// `lo` can no longer be told apart in `f64`.
pub fn ticks(lo: f64, hi: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (lo / step).floor();
    let last = (hi / step).floor();
    let resolvable = step.is_finite()
        && step > 0.0
        && first.is_finite()
        && last.is_finite()
        && first + 1.0 != first;
    let span = if resolvable && last >= first {
        (last - first).min(MAX_TICKS - 1.0)
    } else {
        -1.0
    };
    iter::successors(Some(0.0_f64), |i| Some(i + 1.0))
        .take_while(move |i| *i <= span)
        .map(move |i| (first + i) * step)
}
