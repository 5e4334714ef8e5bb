// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::random::JavaRandom;

const POINT_SATURATION: f32 = 0.8;
const POINT_BRIGHTNESS: f32 = 0.9;

/// Hash of an `f64` as computed by the reference platform's boxed doubles.
///
/// All NaNs hash alike; `0.0` and `-0.0` hash differently.
#[must_use]
pub fn java_double_hash(value: f64) -> i32 {
    let bits = if value.is_nan() {
        0x7ff8_0000_0000_0000_u64
    } else {
        value.to_bits()
    };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the hash keeps the low 32 bits of the folded value"
    )]
    let folded = (bits ^ (bits >> 32)) as i32;
    folded
}

/// Positional hash that seeds the color generator for a point.
#[must_use]
pub fn point_hash(x: f64, y: f64) -> i64 {
    i64::from(java_double_hash(x) ^ java_double_hash(y).wrapping_shl(17))
}

/// Returns the display color of a point feature at `(x, y)`.
///
/// The hue covers the whole wheel, while saturation and brightness are
/// jittered down from `0.8` / `0.9` by at most `0.2` / `0.1` so every point
/// stays legible on a light background. The color depends only on the point's
/// position, never on the seed or on match state.
#[must_use]
pub fn point_color(x: f64, y: f64) -> Color {
    let mut rng = JavaRandom::new(point_hash(x, y));
    let hue = rng.next_float();
    let saturation = POINT_SATURATION - rng.next_float() * 0.2;
    let brightness = POINT_BRIGHTNESS - rng.next_float() * 0.1;
    let [r, g, b] = hsb_to_rgb8(hue, saturation, brightness);
    Color::from_rgb8(r, g, b)
}

/// Converts hue/saturation/brightness in `[0, 1]` to 8-bit RGB.
///
/// The hue wraps, so only its fractional part matters. Rounding follows the
/// reference conversion (`(int)(v * 255 + 0.5)` per channel in `f32`).
#[must_use]
pub fn hsb_to_rgb8(hue: f32, saturation: f32, brightness: f32) -> [u8; 3] {
    if saturation == 0.0 {
        let v = channel(brightness);
        return [v, v, v];
    }
    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "sector index is in 0..6 for a wrapped hue"
    )]
    let sector = h as i32;
    let (r, g, b) = match sector {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        5 => (brightness, p, q),
        _ => (0.0, 0.0, 0.0),
    };
    [channel(r), channel(g), channel(b)]
}

fn channel(v: f32) -> u8 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is clamped into the u8 range first"
    )]
    let c = (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8;
    c
}
