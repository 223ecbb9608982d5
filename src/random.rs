// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use crate::utils::bit_length;

/// Draw an integer uniformly from `[0, bound)` by rejection sampling.
///
/// Each candidate is read little-endian from `1 + bit_length(bound) / 8` fresh random bytes and
/// kept only if it falls below `bound`, so no modulo bias is introduced. The byte source must be
/// a cryptographically secure generator.
///
/// # Panics
///
/// Panics if `bound` is zero, since the range `[0, 0)` is empty.
pub fn uniform<R: CryptoRng + RngCore>(bound: &BigUint, rng: &mut R) -> BigUint {
    assert!(!bound.is_zero(), "The bound must be positive");

    let length = 1 + (bit_length(bound) / 8) as usize;
    let mut bytes = vec![0u8; length];
    loop {
        rng.fill_bytes(&mut bytes);
        let candidate = BigUint::from_bytes_le(&bytes);
        if &candidate < bound {
            return candidate;
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use num_bigint::BigUint;
    use rand::{rngs::StdRng, SeedableRng};

    use super::uniform;

    #[test]
    fn within_bound() {
        let mut rng = StdRng::seed_from_u64(0);
        for bound in [1u64, 2, 3, 31, 255, 256, 1021, 15485867] {
            let bound = BigUint::from(bound);
            for _ in 0..100 {
                assert!(uniform(&bound, &mut rng) < bound);
            }
        }
    }

    #[test]
    fn covers_small_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let bound = BigUint::from(7u8);
        let seen = (0..1000)
            .map(|_| uniform(&bound, &mut rng))
            .collect::<HashSet<_>>();
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn large_bound() {
        let mut rng = StdRng::seed_from_u64(0);
        let bound = (BigUint::from(1u8) << 127) - 1u8;
        let samples = (0..100)
            .map(|_| uniform(&bound, &mut rng))
            .collect::<Vec<_>>();
        assert!(samples.iter().all(|x| x < &bound));
        // Collisions in a 127-bit range would indicate a broken byte source.
        assert_eq!(samples.iter().collect::<HashSet<_>>().len(), samples.len());
    }

    #[test]
    #[should_panic(expected = "The bound must be positive")]
    fn zero_bound() {
        let mut rng = StdRng::seed_from_u64(0);
        uniform(&BigUint::from(0u8), &mut rng);
    }

    #[test]
    fn deterministic_for_seed() {
        let bound = BigUint::from(1_000_003u32);
        let a = uniform(&bound, &mut StdRng::seed_from_u64(42));
        let b = uniform(&bound, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
