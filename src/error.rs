// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("value must be a nonnegative integer")]
    NegativeValue,
    #[error("quantity of shares must be at least 2")]
    QuantityTooSmall,
    #[error("quantity of shares must be an integer that can be represented using at most 32 bits")]
    QuantityTooLarge,
    #[error("prime modulus must be at least 2")]
    ModulusTooSmall,
    #[error("value cannot be greater than the prime modulus")]
    ValueExceedsModulus,
    #[error("threshold must be at least 1 and representable using at most 32 bits")]
    InvalidThreshold,
    #[error("input must contain at least one share")]
    NoShares,
    #[error("all shares must have the same modulus")]
    ModulusMismatch,
    #[error("shares with index {0} carry conflicting values")]
    ConflictingShares(u32),
    #[error("not enough points for a unique interpolation")]
    NotEnoughPoints { required: usize, supplied: usize },
    #[error("share indices are not distinct modulo the prime modulus")]
    NotInvertible,
    #[error("shares being added must have the same index and modulus")]
    IncompatibleShares,
    #[error("scalar must be a nonnegative integer")]
    NegativeScalar,
    #[error("freshly split shares failed to reconstruct the secret")]
    ConsistencyCheck,
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("encoded share is truncated (expected {expected} bytes, got {actual})")]
    Truncated { expected: usize, actual: usize },
    #[error("encoded share has {0} unexpected trailing bytes")]
    TrailingBytes(usize),
    #[error("encoded share declares a zero-length field")]
    EmptyField,
    #[error("encoded share is not valid Base64")]
    InvalidBase64,
}

pub type Result<T> = std::result::Result<T, ShareError>;
