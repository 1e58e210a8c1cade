// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Polymorphic Public Keys
//!
//! A closed tagged type over the signature schemes the platform addresses
//! recipients with: Ed25519 and ECDSA over secp256k1. Each variant knows how
//! to serialize itself and verify signatures; adding a scheme means adding a
//! variant, not subclassing.
//!
//! Verification failures are an expected outcome and are reported as a
//! boolean, never as an error. Errors are reserved for malformed key buffers
//! at construction time.

use ed25519_dalek::Verifier as _;
use k256::ecdsa::signature::Verifier as _;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use super::error::CryptoError;
use super::point::{COMPRESSED_KEY_LEN, UNCOMPRESSED_KEY_LEN};

/// Kind tag for Ed25519 keys.
pub const KIND_ED25519: &str = "ed25519";

/// Kind tag for secp256k1 ECDSA keys.
pub const KIND_SECP256K1: &str = "secp256k1";

/// Ed25519 public key size in bytes.
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

/// A recipient-addressable public key, tagged by signature scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    /// Edwards-curve key verifying Ed25519 signatures.
    Ed25519(ed25519_dalek::VerifyingKey),
    /// secp256k1 key verifying ECDSA signatures over a SHA-256 digest.
    Secp256k1(k256::ecdsa::VerifyingKey),
}

impl PublicKey {
    /// Construct a key of the given kind from its raw byte encoding.
    ///
    /// Unknown kind tags fail with [`CryptoError::InvalidKeyFormat`].
    pub fn from_bytes(kind: &str, bytes: &[u8]) -> Result<Self, CryptoError> {
        match kind {
            KIND_ED25519 => Self::from_ed25519_bytes(bytes),
            KIND_SECP256K1 => Self::from_secp256k1_bytes(bytes),
            other => Err(CryptoError::InvalidKeyFormat {
                reason: format!("unknown key kind '{}'", other),
            }),
        }
    }

    /// Construct an Ed25519 key from its 32-byte encoding.
    pub fn from_ed25519_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != ED25519_PUBLIC_KEY_LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: ED25519_PUBLIC_KEY_LEN,
                actual: bytes.len(),
            });
        }

        let mut raw = [0u8; ED25519_PUBLIC_KEY_LEN];
        raw.copy_from_slice(bytes);
        let key = ed25519_dalek::VerifyingKey::from_bytes(&raw).map_err(|e| {
            CryptoError::InvalidKeyFormat {
                reason: format!("not a canonical ed25519 point: {}", e),
            }
        })?;
        Ok(PublicKey::Ed25519(key))
    }

    /// Construct a secp256k1 key from SEC1 bytes, compressed (33) or
    /// uncompressed (65).
    pub fn from_secp256k1_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != COMPRESSED_KEY_LEN && bytes.len() != UNCOMPRESSED_KEY_LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: COMPRESSED_KEY_LEN,
                actual: bytes.len(),
            });
        }

        let key = k256::ecdsa::VerifyingKey::from_sec1_bytes(bytes).map_err(|e| {
            CryptoError::InvalidKeyFormat {
                reason: format!("not a valid SEC1 secp256k1 point: {}", e),
            }
        })?;
        Ok(PublicKey::Secp256k1(key))
    }

    /// Public half of an Ed25519 signing key.
    pub fn from_ed25519_secret(secret: &ed25519_dalek::SigningKey) -> Self {
        PublicKey::Ed25519(secret.verifying_key())
    }

    /// Public half of a secp256k1 secret key.
    pub fn from_secp256k1_secret(secret: &k256::SecretKey) -> Self {
        PublicKey::Secp256k1(k256::ecdsa::VerifyingKey::from(secret.public_key()))
    }

    /// The kind tag identifying this key's scheme, used by downstream
    /// protocol and address selection.
    pub fn kind(&self) -> &'static str {
        match self {
            PublicKey::Ed25519(_) => KIND_ED25519,
            PublicKey::Secp256k1(_) => KIND_SECP256K1,
        }
    }

    /// Raw byte encoding: 32 bytes for Ed25519, 33-byte compressed SEC1 for
    /// secp256k1.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Ed25519(key) => key.to_bytes().to_vec(),
            PublicKey::Secp256k1(key) => key.to_encoded_point(true).as_bytes().to_vec(),
        }
    }

    /// Verify `signature` over `message` with this key's scheme.
    ///
    /// Returns `false` for wrong-length, malformed, or non-verifying
    /// signatures alike; a bad signature is not an exceptional condition.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            PublicKey::Ed25519(key) => {
                let Ok(sig) = ed25519_dalek::Signature::from_slice(signature) else {
                    return false;
                };
                key.verify(message, &sig).is_ok()
            }
            PublicKey::Secp256k1(key) => {
                let Ok(sig) = k256::ecdsa::Signature::from_slice(signature) else {
                    return false;
                };
                key.verify(message, &sig).is_ok()
            }
        }
    }
}
