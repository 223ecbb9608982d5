// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

//! Homomorphic operations on shares. Adding the shares of several secrets index by index and
//! reconstructing yields the sum of the secrets; scaling every share of a secret by the same
//! integer yields the scaled secret. Results wrap modulo the field prime.

use num_bigint::BigInt;

use crate::{
    error::{Result, ShareError},
    field,
    share::Share,
};

pub fn add(a: &Share, b: &Share) -> Result<Share> {
    if a.index() != b.index() || !a.is_compatible(b) {
        return Err(ShareError::IncompatibleShares);
    }
    let modulus = a.modulus();
    let value = field::add(a.value(), b.value(), modulus);
    Ok(Share::from_parts(a.index(), value, modulus.clone()))
}

/// One step of a running sum, where `None` stands for the additive identity.
pub fn add_to(acc: Option<Share>, next: &Share) -> Result<Share> {
    match acc {
        None => Ok(next.clone()),
        Some(acc) => add(&acc, next),
    }
}

/// Sum shares that all carry the same index and modulus. Returns `None` for an empty input.
pub fn sum<'a, I>(shares: I) -> Result<Option<Share>>
where
    I: IntoIterator<Item = &'a Share>,
{
    shares
        .into_iter()
        .try_fold(None, |acc, share| add_to(acc, share).map(Some))
}

/// Add the shares of several sharings index by index: the `i`-th output is the sum of the `i`-th
/// share of every sharing. Sharings of different lengths are truncated to the shortest one.
pub fn sum_by_index<S: AsRef<[Share]>>(sharings: &[S]) -> Result<Vec<Share>> {
    let length = sharings
        .iter()
        .map(|sharing| sharing.as_ref().len())
        .min()
        .unwrap_or(0);

    // A positive length implies at least one sharing.
    (0..length)
        .map(|i| {
            sharings[1..]
                .iter()
                .try_fold(sharings[0].as_ref()[i].clone(), |acc, sharing| {
                    add(&acc, &sharing.as_ref()[i])
                })
        })
        .collect()
}

pub fn scalar_multiply(a: &Share, scalar: &BigInt) -> Result<Share> {
    let scalar = scalar.to_biguint().ok_or(ShareError::NegativeScalar)?;
    let modulus = a.modulus();
    let value = field::mul(a.value(), &scalar, modulus);
    Ok(Share::from_parts(a.index(), value, modulus.clone()))
}
