// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chunkmap_classify::TileClassifier;

use crate::cell::Cell;

/// Finds the matching cell closest to `center` within a square neighbourhood.
///
/// Offsets are scanned over `[-radius, radius]²` with `dx` in the outer loop
/// and `dz` in the inner loop. A candidate replaces the current best only when
/// its squared offset distance is strictly smaller, so among equidistant
/// matches the first one in that order wins. Cells whose coordinates exceed
/// `max_abs` (or overflow `i32`) are skipped.
///
/// Once a match is found, columns that cannot hold a closer one are skipped,
/// so a wide radius costs little when a match lies near the centre.
///
/// Returns `None` if `radius` is negative or nothing in range matches.
#[must_use]
pub fn find_nearest<C>(classifier: &C, center: Cell, radius: i32, max_abs: i32) -> Option<Cell>
where
    C: TileClassifier + ?Sized,
{
    if radius < 0 {
        return None;
    }
    let mut best: Option<(i64, Cell)> = None;
    for dx in -radius..=radius {
        let column = i64::from(dx) * i64::from(dx);
        if best.is_some_and(|(d, _)| column >= d) {
            // Columns only get farther once past the centre.
            if dx > 0 {
                break;
            }
            continue;
        }
        let Some(x) = center.x.checked_add(dx) else {
            continue;
        };
        for dz in -radius..=radius {
            let Some(z) = center.z.checked_add(dz) else {
                continue;
            };
            let candidate = Cell::new(x, z);
            if !candidate.within(max_abs) {
                continue;
            }
            let distance = column + i64::from(dz) * i64::from(dz);
            if best.is_some_and(|(d, _)| distance >= d) {
                continue;
            }
            if classifier.classify(x, z) {
                best = Some((distance, candidate));
            }
        }
    }
    best.map(|(_, cell)| cell)
}
