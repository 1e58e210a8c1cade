// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Crypto Error Types
//!
//! Error taxonomy shared by every module in the crypto core. All variants are
//! local, recoverable conditions surfaced to the immediate caller; none are
//! fatal to the process.
//!
//! Note that signature verification never produces one of these errors for a
//! signature that simply does not match: that is a boolean `false` from
//! [`PublicKey::verify`](crate::crypto::PublicKey::verify). Errors are reserved
//! for structurally malformed input.

use std::fmt;

/// Error type for all operations in the crypto core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// A key buffer does not have the exact length its kind requires.
    InvalidKeyLength {
        /// Expected key size in bytes
        expected: usize,
        /// Actual key size provided
        actual: usize,
    },

    /// A key buffer has the right length but the wrong shape
    /// (bad SEC1 marker byte, non-canonical point encoding, wrong kind).
    InvalidKeyFormat {
        /// Specific failure reason
        reason: String,
    },

    /// The x-coordinate has no square root on the curve for either parity.
    ///
    /// Returned by point decompression when `x^3 + b` is not a quadratic
    /// residue in the field, i.e. the candidate x does not lie on the curve.
    InvalidPoint,

    /// Envelope serialization failed because a field is mis-sized.
    EncodeError {
        /// Which envelope field failed validation
        field: String,
        /// Specific failure reason
        reason: String,
    },

    /// Envelope deserialization failed (buffer too short, unknown marker
    /// byte, or a nested point/key error).
    DecodeError {
        /// Specific failure reason
        reason: String,
    },

    /// The envelope's authentication code did not match the recomputed one.
    ///
    /// Checked in constant time before any decryption is attempted.
    AuthenticationFailed,

    /// Authentication passed but the ciphertext could not be decrypted.
    ///
    /// Deliberately carries no further detail; distinguishing padding
    /// failures from other cipher failures would hand an oracle to callers.
    DecryptionFailed,

    /// Generic error for library errors or unexpected failures
    Other(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidKeyLength { expected, actual } => {
                write!(
                    f,
                    "Invalid key length: expected {} bytes, got {}",
                    expected, actual
                )
            }
            CryptoError::InvalidKeyFormat { reason } => {
                write!(f, "Invalid key format: {}", reason)
            }
            CryptoError::InvalidPoint => {
                write!(f, "Invalid curve point: x-coordinate is not on the curve")
            }
            CryptoError::EncodeError { field, reason } => {
                write!(f, "Envelope encode failed on field '{}': {}", field, reason)
            }
            CryptoError::DecodeError { reason } => {
                write!(f, "Envelope decode failed: {}", reason)
            }
            CryptoError::AuthenticationFailed => {
                write!(f, "Message authentication failed")
            }
            CryptoError::DecryptionFailed => {
                write!(f, "Decryption failed")
            }
            CryptoError::Other(msg) => {
                write!(f, "Crypto error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CryptoError {}
