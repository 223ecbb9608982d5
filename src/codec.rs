// Copyright (c) Alberto Sonnino
// SPDX-License-Identifier: Apache-2.0

//! Canonical share encoding. All integers are little-endian:
//!
//! ```text
//! [4 bytes: index][4 bytes: L][L bytes: value][L bytes: modulus]
//! ```
//!
//! where `L` is the byte length of the modulus. The text form is the standard Base64 encoding of
//! the bytes.

use std::str::FromStr;

use fastcrypto::encoding::{Base64, Encoding};
use num_bigint::BigUint;

use crate::{
    error::{CodecError, Result, ShareError},
    share::Share,
    utils::{byte_length, to_padded_le_bytes},
};

const HEADER_LENGTH: usize = 8;

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

impl Share {
    pub fn encode(&self) -> Vec<u8> {
        // Unreduced values wider than the modulus widen both fields so the encoding stays lossless.
        let length = byte_length(self.modulus()).max(byte_length(self.value()));

        let mut bytes = Vec::with_capacity(HEADER_LENGTH + 2 * length);
        bytes.extend_from_slice(&self.index().to_le_bytes());
        bytes.extend_from_slice(&(length as u32).to_le_bytes());
        bytes.extend(to_padded_le_bytes(self.value(), length));
        bytes.extend(to_padded_le_bytes(self.modulus(), length));
        bytes
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LENGTH {
            return Err(CodecError::Truncated {
                expected: HEADER_LENGTH,
                actual: bytes.len(),
            }
            .into());
        }
        let index = read_u32(&bytes[0..4]);
        let length = read_u32(&bytes[4..8]) as usize;
        if length == 0 {
            return Err(CodecError::EmptyField.into());
        }

        let expected = length
            .checked_mul(2)
            .and_then(|fields| fields.checked_add(HEADER_LENGTH))
            .unwrap_or(usize::MAX);
        if bytes.len() < expected {
            return Err(CodecError::Truncated {
                expected,
                actual: bytes.len(),
            }
            .into());
        }
        if bytes.len() > expected {
            return Err(CodecError::TrailingBytes(bytes.len() - expected).into());
        }

        let (value, modulus) = bytes[HEADER_LENGTH..].split_at(length);
        Share::new(
            index,
            BigUint::from_bytes_le(value),
            BigUint::from_bytes_le(modulus),
        )
    }

    pub fn to_text(&self) -> String {
        Base64::encode(self.encode())
    }

    pub fn from_text(text: &str) -> Result<Self> {
        let bytes = Base64::decode(text.trim()).map_err(|_| CodecError::InvalidBase64)?;
        Self::decode(&bytes)
    }
}

impl FromStr for Share {
    type Err = ShareError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigUint;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{
        error::{CodecError, ShareError},
        random::uniform,
        shamir::DEFAULT_MODULUS,
        share::Share,
    };

    fn share(index: u32, value: BigUint, modulus: BigUint) -> Share {
        Share::new(index, value, modulus).unwrap()
    }

    fn reference() -> Share {
        share(123, BigUint::from(456u16), BigUint::from(1021u16))
    }

    const REFERENCE_BYTES: [u8; 12] = [
        0x7b, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0xc8, 0x01, 0xfd, 0x03,
    ];

    #[test]
    fn encode() {
        assert_eq!(reference().encode(), REFERENCE_BYTES.to_vec());
    }

    #[test]
    fn decode() {
        assert_eq!(Share::decode(&REFERENCE_BYTES).unwrap(), reference());
    }

    #[test]
    fn text() {
        assert_eq!(reference().to_text(), "ewAAAAIAAADIAf0D");
        assert_eq!(Share::from_text("ewAAAAIAAADIAf0D").unwrap(), reference());
        assert_eq!("ewAAAAIAAADIAf0D".parse::<Share>().unwrap(), reference());
    }

    #[test]
    fn zero_value_is_padded() {
        let s = share(0, BigUint::from(0u8), BigUint::from(2u8));
        assert_eq!(s.encode(), vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 2]);
    }

    #[test]
    fn round_trip() {
        let mut rng = StdRng::seed_from_u64(0);
        let modulus = BigUint::from(DEFAULT_MODULUS);
        for index in [0, 1, 3, 0xffff, u32::MAX] {
            let value = uniform(&modulus, &mut rng);
            let s = share(index, value, modulus.clone());
            assert_eq!(s.encode().len(), 8 + 2 * 16);
            assert_eq!(Share::decode(&s.encode()).unwrap(), s);
            assert_eq!(Share::from_text(&s.to_text()).unwrap(), s);
        }

        let s = share(rng.gen(), BigUint::from(1u8) << 100, modulus);
        assert_eq!(Share::decode(&s.encode()).unwrap(), s);
    }

    #[test]
    fn round_trip_unreduced() {
        let s = share(7, BigUint::from(70000u32), BigUint::from(31u8));
        let bytes = s.encode();
        assert_eq!(&bytes[4..8], &[3, 0, 0, 0]);
        assert_eq!(Share::decode(&bytes).unwrap(), s);
    }

    #[test]
    fn truncated() {
        assert_eq!(
            Share::decode(&[]),
            Err(ShareError::Codec(CodecError::Truncated {
                expected: 8,
                actual: 0
            }))
        );
        assert_eq!(
            Share::decode(&REFERENCE_BYTES[..7]),
            Err(ShareError::Codec(CodecError::Truncated {
                expected: 8,
                actual: 7
            }))
        );
        assert_eq!(
            Share::decode(&REFERENCE_BYTES[..11]),
            Err(ShareError::Codec(CodecError::Truncated {
                expected: 12,
                actual: 11
            }))
        );
    }

    #[test]
    fn trailing_bytes() {
        let mut bytes = REFERENCE_BYTES.to_vec();
        bytes.extend([0, 0]);
        assert_eq!(
            Share::decode(&bytes),
            Err(ShareError::Codec(CodecError::TrailingBytes(2)))
        );
    }

    #[test]
    fn empty_field() {
        assert_eq!(
            Share::decode(&[1, 0, 0, 0, 0, 0, 0, 0]),
            Err(ShareError::Codec(CodecError::EmptyField))
        );
    }

    #[test]
    fn invalid_modulus() {
        assert_eq!(
            Share::decode(&[1, 0, 0, 0, 1, 0, 0, 0, 5, 1]),
            Err(ShareError::ModulusTooSmall)
        );
    }

    #[test]
    fn invalid_text() {
        assert_eq!(
            Share::from_text("not base64!"),
            Err(ShareError::Codec(CodecError::InvalidBase64))
        );
        assert!(matches!(
            Share::from_text("ewAAAAIAAAA="),
            Err(ShareError::Codec(CodecError::Truncated { .. }))
        ));
    }
}
