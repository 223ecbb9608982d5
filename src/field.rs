// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

//! Arithmetic in the prime field of integers modulo `p`. Every function accepts unreduced
//! operands and returns the least nonnegative residue.

use std::mem;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

pub fn reduce(a: &BigUint, modulus: &BigUint) -> BigUint {
    a % modulus
}

pub fn add(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a + b) % modulus
}

pub fn sub(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    let (a, b) = (a % modulus, b % modulus);
    if a >= b {
        a - b
    } else {
        modulus - b + a
    }
}

pub fn neg(a: &BigUint, modulus: &BigUint) -> BigUint {
    sub(&BigUint::zero(), a, modulus)
}

pub fn mul(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a * b) % modulus
}

pub fn pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exponent, modulus)
}

/// Multiplicative inverse via the extended Euclidean algorithm. Returns `None` when `a` and the
/// modulus are not coprime (in particular when `a` is a multiple of a prime modulus).
pub fn inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let modulus = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let (mut old_r, mut r) = (
        BigInt::from_biguint(Sign::Plus, a.clone()) % &modulus,
        modulus.clone(),
    );
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }
    (((old_s % &modulus) + &modulus) % &modulus).to_biguint()
}
