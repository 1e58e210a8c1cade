// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! secp256k1 Prime-Field Arithmetic
//!
//! Recovers the y-coordinate of a curve point from its x-coordinate and a
//! parity bit, which is the arithmetic behind SEC1 point compression. The
//! curve is `y^2 = x^3 + 7` over the field of prime
//! `p = 2^256 - 2^32 - 977`. Because `p = 3 (mod 4)` the square root of a
//! quadratic residue `a` is simply `a^((p+1)/4) mod p`, no Tonelli-Shanks
//! machinery needed.
//!
//! Pure functions over big integers; no secret material flows through this
//! module (x-coordinates and parities are public wire data).

use num_bigint::BigUint;

use super::error::CryptoError;

/// secp256k1 field prime, big-endian.
const FIELD_PRIME: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff,
    0xfc, 0x2f,
];

/// secp256k1 curve constant `b` (the `a` coefficient is zero).
const CURVE_B: u8 = 7;

fn field_prime() -> BigUint {
    BigUint::from_bytes_be(&FIELD_PRIME)
}

/// Recover the y-coordinate for a compressed point.
///
/// Computes `sqrt(x^3 + 7) mod p` and returns the root whose parity matches
/// `odd`. Fails with [`CryptoError::InvalidPoint`] when `x` is not a field
/// element or `x^3 + 7` has no square root, meaning the x-coordinate does
/// not lie on the curve.
pub fn recover_y(x: &[u8; 32], odd: bool) -> Result<[u8; 32], CryptoError> {
    let p = field_prime();
    let x = BigUint::from_bytes_be(x);
    if x >= p {
        return Err(CryptoError::InvalidPoint);
    }

    // alpha = x^3 + b mod p
    let alpha = (x.modpow(&BigUint::from(3u8), &p) + BigUint::from(CURVE_B)) % &p;

    // Candidate root via the p = 3 (mod 4) shortcut.
    let exponent = (&p + BigUint::from(1u8)) >> 2u32;
    let beta = alpha.modpow(&exponent, &p);

    // The shortcut yields a root only when alpha is a quadratic residue;
    // squaring back detects the off-curve case.
    if beta.modpow(&BigUint::from(2u8), &p) != alpha {
        return Err(CryptoError::InvalidPoint);
    }

    // The two roots are beta and p - beta, one even and one odd.
    let y = if beta.bit(0) == odd { beta } else { &p - beta };

    let raw = y.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - raw.len()..].copy_from_slice(&raw);
    Ok(out)
}
