// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use num_bigint::BigUint;

use crate::error::{Result, ShareError};

/// One evaluation point `(index, value)` of a sharing polynomial over the field of integers modulo
/// `modulus`. The value is interpreted modulo `modulus` but is not required to be reduced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    index: u32,
    value: BigUint,
    modulus: BigUint,
}

impl Share {
    pub fn new(index: u32, value: BigUint, modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u8) {
            return Err(ShareError::ModulusTooSmall);
        }
        Ok(Self::from_parts(index, value, modulus))
    }

    /// Callers guarantee `modulus >= 2`.
    pub(crate) fn from_parts(index: u32, value: BigUint, modulus: BigUint) -> Self {
        Self {
            index,
            value,
            modulus,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The least nonnegative residue of the value.
    pub fn residue(&self) -> BigUint {
        &self.value % &self.modulus
    }

    /// Shares are compatible when they live in the same field.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }

    pub fn into_inner(self) -> (u32, BigUint, BigUint) {
        (self.index, self.value, self.modulus)
    }

    pub fn as_coordinates(&self) -> (u32, &BigUint) {
        (self.index, &self.value)
    }
}

impl AsRef<Share> for Share {
    fn as_ref(&self) -> &Share {
        self
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "share({}, {}, {})", self.index, self.value, self.modulus)
    }
}
