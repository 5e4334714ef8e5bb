// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

use crate::random::JavaRandom;

/// Constant XORed into the mixed cell hash before seeding the generator.
pub const SLIME_MAGIC: i64 = 987_234_911;

/// A 64-bit world seed.
///
/// Parsing accepts an optionally signed decimal integer surrounded by
/// whitespace; anything else is rejected without producing a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(pub i64);

impl Seed {
    /// Returns the raw seed value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for Seed {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Returns `true` if the chunk at `(cx, cz)` is a slime chunk for `seed`.
///
/// The mixing formula is a compatibility contract:
///
/// ```text
/// hash = seed + i32(cx*cx)*4987142 + cx*5947611 + i32(cz*cz)*4392871 + cz*389711
/// hash ^= 987234911
/// slime = JavaRandom(hash).next_int(10) == 0
/// ```
///
/// All 64-bit arithmetic wraps. The squares are 32-bit products that wrap
/// before being widened, exactly as in the reference, which matters once
/// `|cx|` or `|cz|` exceeds 46340.
#[must_use]
pub fn is_slime_chunk(seed: i64, cx: i32, cz: i32) -> bool {
    let hash = seed
        .wrapping_add(i64::from(cx.wrapping_mul(cx)).wrapping_mul(4_987_142))
        .wrapping_add(i64::from(cx).wrapping_mul(5_947_611))
        .wrapping_add(i64::from(cz.wrapping_mul(cz)).wrapping_mul(4_392_871))
        .wrapping_add(i64::from(cz).wrapping_mul(389_711));
    JavaRandom::new(hash ^ SLIME_MAGIC).next_int(10) == 0
}

/// A deterministic boolean labelling of integer cells.
///
/// Implementations must be pure: the answer for a cell may depend only on the
/// implementation's own immutable parameters (such as a seed) and the cell.
pub trait TileClassifier {
    /// Returns `true` if the cell at `(cx, cz)` matches.
    fn classify(&self, cx: i32, cz: i32) -> bool;
}

impl<F> TileClassifier for F
where
    F: Fn(i32, i32) -> bool,
{
    fn classify(&self, cx: i32, cz: i32) -> bool {
        self(cx, cz)
    }
}

/// The reference slime chunk classifier for one world seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlimeClassifier {
    seed: Seed,
}

impl SlimeClassifier {
    /// Creates a classifier for `seed`.
    #[must_use]
    pub const fn new(seed: Seed) -> Self {
        Self { seed }
    }

    /// Returns the seed this classifier labels cells for.
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }
}

impl TileClassifier for SlimeClassifier {
    fn classify(&self, cx: i32, cz: i32) -> bool {
        is_slime_chunk(self.seed.0, cx, cz)
    }
}
