// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! EC Point Compression
//!
//! Converts secp256k1 public keys between the 65-byte SEC1 uncompressed form
//! (`0x04 || X || Y`) and the 33-byte compressed form (`0x02|0x03 || X`),
//! where the one-byte prefix records the parity of Y. Decompression recovers
//! Y through [`field::recover_y`](super::field::recover_y) and is lossless:
//! `decompress(compress(k)) == k` for every valid key `k`.
//!
//! The compressed form is an internal wire encoding of the envelope codec;
//! callers of the crypto core only ever see uncompressed keys.

use super::error::CryptoError;
use super::field;

/// SEC1 uncompressed public key size (marker + X + Y).
pub const UNCOMPRESSED_KEY_LEN: usize = 65;

/// SEC1 compressed public key size (parity prefix + X).
pub const COMPRESSED_KEY_LEN: usize = 33;

const UNCOMPRESSED_PREFIX: u8 = 0x04;
const COMPRESSED_PREFIX_EVEN: u8 = 0x02;
const COMPRESSED_PREFIX_ODD: u8 = 0x03;

/// Compress a 65-byte uncompressed secp256k1 public key to 33 bytes.
pub fn compress(uncompressed: &[u8]) -> Result<[u8; COMPRESSED_KEY_LEN], CryptoError> {
    if uncompressed.len() != UNCOMPRESSED_KEY_LEN {
        return Err(CryptoError::InvalidKeyLength {
            expected: UNCOMPRESSED_KEY_LEN,
            actual: uncompressed.len(),
        });
    }

    if uncompressed[0] != UNCOMPRESSED_PREFIX {
        return Err(CryptoError::InvalidKeyFormat {
            reason: format!(
                "expected uncompressed point marker 0x{:02x}, got 0x{:02x}",
                UNCOMPRESSED_PREFIX, uncompressed[0]
            ),
        });
    }

    let mut out = [0u8; COMPRESSED_KEY_LEN];
    // Parity of Y is the parity of its least significant byte.
    out[0] = if uncompressed[UNCOMPRESSED_KEY_LEN - 1] & 1 == 0 {
        COMPRESSED_PREFIX_EVEN
    } else {
        COMPRESSED_PREFIX_ODD
    };
    out[1..].copy_from_slice(&uncompressed[1..33]);
    Ok(out)
}

/// Decompress a 33-byte compressed secp256k1 public key back to 65 bytes.
///
/// Fails with [`CryptoError::InvalidPoint`] when the embedded x-coordinate
/// is not on the curve.
pub fn decompress(compressed: &[u8]) -> Result<[u8; UNCOMPRESSED_KEY_LEN], CryptoError> {
    if compressed.len() != COMPRESSED_KEY_LEN {
        return Err(CryptoError::InvalidKeyLength {
            expected: COMPRESSED_KEY_LEN,
            actual: compressed.len(),
        });
    }

    let odd = match compressed[0] {
        COMPRESSED_PREFIX_EVEN => false,
        COMPRESSED_PREFIX_ODD => true,
        other => {
            return Err(CryptoError::InvalidKeyFormat {
                reason: format!("expected parity prefix 0x02 or 0x03, got 0x{:02x}", other),
            })
        }
    };

    let mut x = [0u8; 32];
    x.copy_from_slice(&compressed[1..]);
    let y = field::recover_y(&x, odd)?;

    let mut out = [0u8; UNCOMPRESSED_KEY_LEN];
    out[0] = UNCOMPRESSED_PREFIX;
    out[1..33].copy_from_slice(&x);
    out[33..].copy_from_slice(&y);
    Ok(out)
}
