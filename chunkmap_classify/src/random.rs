// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const ADDEND: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

/// 48-bit linear congruential generator compatible with `java.util.Random`.
///
/// Only the operations the classifier and the point colors need are provided.
/// Each one consumes the underlying state exactly like the reference
/// implementation, so sequences agree value for value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JavaRandom {
    state: i64,
}

impl JavaRandom {
    /// Creates a generator from a 64-bit seed.
    ///
    /// The seed is scrambled with the multiplier and truncated to 48 bits.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Re-seeds the generator as if it had been created with `seed`.
    pub fn set_seed(&mut self, seed: i64) {
        *self = Self::new(seed);
    }

    /// Advances the state and returns the top `bits` bits (1..=32).
    fn next(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits), "bits out of range: {bits}");
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(ADDEND)
            & MASK;
        // The state is non-negative after masking, so this is a logical shift.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the reference generator keeps the low 32 bits"
        )]
        let value = (self.state >> (48 - bits)) as i32;
        value
    }

    /// Returns a uniformly distributed value in `0..bound`.
    ///
    /// Powers of two take the high bits directly; other bounds use rejection
    /// sampling over 31-bit draws, so the number of draws consumed varies.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive.
    pub fn next_int(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive, got {bound}");
        if bound & bound.wrapping_neg() == bound {
            let r = i64::from(self.next(31));
            #[expect(
                clippy::cast_possible_truncation,
                reason = "the product shifted by 31 is below `bound`"
            )]
            let value = ((i64::from(bound) * r) >> 31) as i32;
            return value;
        }
        loop {
            let bits = self.next(31);
            let value = bits % bound;
            // Rejects the final partial bucket; overflow here is the reference's test.
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    /// Returns a uniformly distributed `f32` in `[0, 1)` built from 24 bits.
    pub fn next_float(&mut self) -> f32 {
        // 24-bit values are exactly representable in f32.
        self.next(24) as f32 / (1_u32 << 24) as f32
    }

    /// Returns a 64-bit value assembled from two 32-bit draws.
    pub fn next_long(&mut self) -> i64 {
        let high = i64::from(self.next(32)) << 32;
        high.wrapping_add(i64::from(self.next(32)))
    }
}
