// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

use num_bigint::BigUint;

/// Number of bits needed to represent an integer (zero for zero).
pub fn bit_length(n: &BigUint) -> u64 {
    n.bits()
}

/// Number of whole bytes needed to represent an integer (zero for zero).
pub fn byte_length(n: &BigUint) -> usize {
    ((bit_length(n) + 7) / 8) as usize
}

/// Little-endian bytes of an integer, zero-padded up to `length` bytes.
pub fn to_padded_le_bytes(n: &BigUint, length: usize) -> Vec<u8> {
    let mut bytes = n.to_bytes_le();
    if bytes.len() < length {
        bytes.resize(length, 0);
    }
    bytes
}
