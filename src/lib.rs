// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

//! Shamir's threshold secret sharing over prime fields.
//!
//! A nonnegative integer secret is split into shares such that any `threshold` of them
//! reconstruct it while fewer reveal nothing. Shares support homomorphic addition and scalar
//! multiplication (see [`algebra`]) and have a canonical byte and Base64 encoding.

pub mod algebra;
mod codec;
pub mod error;
pub mod field;
pub mod random;
pub mod shamir;
pub mod share;
mod utils;

pub use error::{CodecError, Result, ShareError};
pub use shamir::{
    default_modulus, reconstruct, split, split_with_rng, Advisory, ShareSet, DEFAULT_MODULUS,
};
pub use share::Share;
