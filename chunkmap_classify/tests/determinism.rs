// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Determinism and distribution checks for the slime chunk classifier.

use chunkmap_classify::{JavaRandom, Seed, SlimeClassifier, TileClassifier, is_slime_chunk};
use proptest::prelude::*;

proptest! {
    #[test]
    fn classification_is_repeatable(seed in any::<i64>(), cx in any::<i32>(), cz in any::<i32>()) {
        let first = is_slime_chunk(seed, cx, cz);
        for _ in 0..3 {
            prop_assert_eq!(is_slime_chunk(seed, cx, cz), first);
        }
        prop_assert_eq!(SlimeClassifier::new(Seed(seed)).classify(cx, cz), first);
    }

    #[test]
    fn next_int_stays_in_bounds(seed in any::<i64>(), bound in 1_i32..=i32::MAX) {
        let mut rng = JavaRandom::new(seed);
        for _ in 0..8 {
            let v = rng.next_int(bound);
            prop_assert!((0..bound).contains(&v));
        }
    }

    #[test]
    fn seed_text_round_trips(seed in any::<i64>()) {
        let parsed: Seed = seed.to_string().parse().unwrap();
        prop_assert_eq!(parsed, Seed(seed));
    }
}

#[test]
fn density_is_near_one_in_ten() {
    let mut matches = 0_u32;
    for cx in -100..100 {
        for cz in -100..100 {
            if is_slime_chunk(99, cx, cz) {
                matches += 1;
            }
        }
    }
    assert_eq!(matches, 4026);
}

#[test]
fn different_seeds_label_differently() {
    let a = SlimeClassifier::new(Seed(0));
    let b = SlimeClassifier::new(Seed(42));
    let differs = (-4..=4).any(|cx| (-4..=4).any(|cz| a.classify(cx, cz) != b.classify(cx, cz)));
    assert!(differs);
}
