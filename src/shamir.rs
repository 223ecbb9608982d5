// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

use std::{
    collections::{btree_map::Entry, BTreeMap},
    fmt,
};

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::{
    error::{Result, ShareError},
    field,
    random::uniform,
    share::Share,
};

/// The Mersenne prime `2^127 - 1`, used whenever no modulus is specified.
pub const DEFAULT_MODULUS: u128 = (1 << 127) - 1;

/// Number of threshold-sized subsets re-checked by the `double-check` feature.
#[cfg(feature = "double-check")]
const DOUBLE_CHECK_SUBSETS: usize = 16;

pub fn default_modulus() -> BigUint {
    BigUint::from(DEFAULT_MODULUS)
}

/// Non-fatal conditions detected while splitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// Fewer shares were produced than are needed to reconstruct.
    ThresholdExceedsQuantity { threshold: u64, quantity: u64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThresholdExceedsQuantity {
                threshold,
                quantity,
            } => write!(
                f,
                "quantity of shares should be at least the threshold to be reconstructable \
                 (threshold {threshold}, quantity {quantity})"
            ),
        }
    }
}

/// The output of a split: the shares in ascending index order, the threshold they were generated
/// with, and any advisory raised along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    shares: Vec<Share>,
    threshold: u64,
    advisory: Option<Advisory>,
}

impl ShareSet {
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn into_shares(self) -> Vec<Share> {
        self.shares
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    /// Whether the produced shares alone suffice to reconstruct the secret.
    pub fn is_reconstructable(&self) -> bool {
        self.advisory.is_none()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

impl AsRef<[Share]> for ShareSet {
    fn as_ref(&self) -> &[Share] {
        &self.shares
    }
}

impl IntoIterator for ShareSet {
    type Item = Share;
    type IntoIter = std::vec::IntoIter<Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}

pub(crate) struct ShamirPolynomial {
    coefficients: Vec<BigUint>,
    modulus: BigUint,
}

impl ShamirPolynomial {
    /// Generate a random polynomial of a given degree, fixing f(0) = secret
    pub fn random<R: CryptoRng + RngCore>(
        secret: BigUint,
        degree: usize,
        modulus: &BigUint,
        rng: &mut R,
    ) -> Self {
        let mut f = Vec::with_capacity(degree + 1);
        f.push(secret);
        for _ in 0..degree {
            f.push(uniform(modulus, rng));
        }
        Self {
            coefficients: f,
            modulus: modulus.clone(),
        }
    }

    /// Evaluate a polynomial at x using Horner's method
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        let m = &self.modulus;
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |y, c| field::add(&field::mul(&y, x, m), c, m))
    }
}

/// Split `value` into `quantity` shares using fresh operating-system entropy.
///
/// See [`split_with_rng`].
pub fn split(
    value: &BigInt,
    quantity: u64,
    modulus: Option<&BigInt>,
    threshold: Option<u64>,
) -> Result<ShareSet> {
    split_with_rng(value, quantity, modulus, threshold, &mut OsRng)
}

/// Split `value` into `quantity` shares with indices `1..=quantity`, any `threshold` of which
/// reconstruct it. The modulus defaults to [`DEFAULT_MODULUS`] and the threshold to `quantity`.
///
/// A threshold larger than `quantity` is accepted; the returned set then carries an [`Advisory`]
/// since the shares alone can never reconstruct the secret.
pub fn split_with_rng<R: CryptoRng + RngCore>(
    value: &BigInt,
    quantity: u64,
    modulus: Option<&BigInt>,
    threshold: Option<u64>,
    rng: &mut R,
) -> Result<ShareSet> {
    let value = value.to_biguint().ok_or(ShareError::NegativeValue)?;

    if quantity < 2 {
        return Err(ShareError::QuantityTooSmall);
    }
    let last_index = u32::try_from(quantity).map_err(|_| ShareError::QuantityTooLarge)?;

    let modulus = match modulus {
        Some(modulus) => modulus.to_biguint().ok_or(ShareError::ModulusTooSmall)?,
        None => default_modulus(),
    };
    if modulus < BigUint::from(2u8) {
        return Err(ShareError::ModulusTooSmall);
    }
    if value >= modulus {
        return Err(ShareError::ValueExceedsModulus);
    }

    let threshold = threshold.unwrap_or(quantity);
    if threshold == 0 || threshold > u32::MAX as u64 {
        return Err(ShareError::InvalidThreshold);
    }
    let advisory = (threshold > quantity).then_some(Advisory::ThresholdExceedsQuantity {
        threshold,
        quantity,
    });

    #[cfg(feature = "double-check")]
    let secret = value.clone();

    // Only `quantity` points are evaluated, so coefficients beyond degree `quantity` would not
    // change the distribution of the shares.
    let degree = (threshold - 1).min(quantity) as usize;
    let polynomial = ShamirPolynomial::random(value, degree, &modulus, rng);
    let shares = (1..=last_index)
        .map(|index| {
            let value = polynomial.evaluate(&BigUint::from(index));
            Share::from_parts(index, value, modulus.clone())
        })
        .collect::<Vec<_>>();

    #[cfg(feature = "double-check")]
    double_check(&secret, &shares, threshold as usize)?;

    Ok(ShareSet {
        shares,
        threshold,
        advisory,
    })
}

/// Reconstruct a secret by Lagrange interpolation at zero.
///
/// The threshold defaults to the number of shares supplied. Shares may come in any order; repeated
/// copies of the same share are counted once. When more distinct shares than `threshold` are
/// available, the `threshold` shares with the smallest indices are used.
///
/// A threshold smaller than the one the shares were generated with is not detected: the result is
/// then a well-defined but meaningless field element.
pub fn reconstruct<S: AsRef<Share>>(shares: &[S], threshold: Option<usize>) -> Result<BigUint> {
    let modulus = shares.first().ok_or(ShareError::NoShares)?.as_ref().modulus();
    if shares.iter().any(|s| s.as_ref().modulus() != modulus) {
        return Err(ShareError::ModulusMismatch);
    }

    let threshold = threshold.unwrap_or(shares.len());
    if threshold == 0 {
        return Err(ShareError::InvalidThreshold);
    }

    let mut points = BTreeMap::new();
    for share in shares {
        let share = share.as_ref();
        let y = share.residue();
        match points.entry(share.index()) {
            Entry::Vacant(entry) => {
                entry.insert(y);
            }
            Entry::Occupied(entry) => {
                if entry.get() != &y {
                    return Err(ShareError::ConflictingShares(share.index()));
                }
            }
        }
    }

    if points.len() < threshold {
        return Err(ShareError::NotEnoughPoints {
            required: threshold,
            supplied: points.len(),
        });
    }

    let points = points
        .into_iter()
        .take(threshold)
        .map(|(x, y)| (BigUint::from(x), y))
        .collect::<Vec<_>>();
    interpolate_at_zero(&points, modulus)
}

/// Evaluate at zero the unique polynomial of degree `points.len() - 1` passing through `points`.
fn interpolate_at_zero(points: &[(BigUint, BigUint)], modulus: &BigUint) -> Result<BigUint> {
    let mut y = BigUint::zero();
    for (i, (x0, y0)) in points.iter().enumerate() {
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();
        for (j, (x1, _y1)) in points.iter().enumerate() {
            if i != j {
                numerator = field::mul(&numerator, &field::neg(x1, modulus), modulus);
                denominator = field::mul(&denominator, &field::sub(x0, x1, modulus), modulus);
            }
        }
        let denominator = field::inverse(&denominator, modulus).ok_or(ShareError::NotInvertible)?;
        let li = field::mul(&numerator, &denominator, modulus);
        y = field::add(&y, &field::mul(&li, y0, modulus), modulus);
    }
    Ok(y)
}

#[cfg(feature = "double-check")]
fn double_check(secret: &BigUint, shares: &[Share], threshold: usize) -> Result<()> {
    use itertools::Itertools;

    if threshold > shares.len() {
        return Ok(());
    }
    for subset in shares
        .iter()
        .combinations(threshold)
        .take(DOUBLE_CHECK_SUBSETS)
    {
        if &reconstruct(&subset, Some(threshold))? != secret {
            return Err(ShareError::ConsistencyCheck);
        }
    }
    Ok(())
}
