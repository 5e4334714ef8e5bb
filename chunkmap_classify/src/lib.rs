// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chunkmap Classify: deterministic, seeded classification of map cells.
//!
//! Everything in this crate is a pure function of its inputs. The same seed and
//! cell coordinate always produce the same answer, across runs and platforms,
//! and the answers agree bit-for-bit with the reference generator the map
//! format was defined against.
//!
//! - [`JavaRandom`]: the 48-bit linear congruential generator whose
//!   `next_int(bound)` rejection sampling the classifier depends on.
//! - [`is_slime_chunk`]: the reference slime chunk test for one cell.
//! - [`TileClassifier`]: "seeded boolean per cell" as a trait, implemented by
//!   [`SlimeClassifier`] and by plain closures.
//! - [`point_color`]: the per-point hash color used when the map shows point
//!   features instead of cells.
//!
//! ```rust
//! use chunkmap_classify::{Seed, SlimeClassifier, TileClassifier, is_slime_chunk};
//!
//! let classifier = SlimeClassifier::new(Seed(0));
//! assert!(classifier.classify(-2, 0));
//! assert_eq!(classifier.classify(0, 0), is_slime_chunk(0, 0, 0));
//! ```

mod color;
mod random;
mod slime;

pub use color::{hsb_to_rgb8, java_double_hash, point_color, point_hash};
pub use random::JavaRandom;
pub use slime::{SLIME_MAGIC, Seed, SlimeClassifier, TileClassifier, is_slime_chunk};
