// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Cryptographic Core
//!
//! The engine behind key-addressed messaging: recipients are identified by
//! blockchain-style public keys and message payloads travel as hybrid
//! encryption envelopes. The module splits into:
//!
//! - **keys**: polymorphic public key over Ed25519 and secp256k1, with
//!   per-scheme signature verification
//! - **field / point**: secp256k1 field arithmetic and SEC1 point
//!   compression, used to shrink the ephemeral key on the wire
//! - **envelope**: the bit-exact wire codec for the four-field envelope
//! - **cipher**: ECIES-style encrypt/decrypt producing and consuming those
//!   envelopes
//!
//! ## Security Considerations
//!
//! - Every operation is a pure, synchronous transform over its arguments;
//!   there is no shared state and the module is freely callable from
//!   concurrent tasks
//! - Ephemeral keys and IVs come from the operating system CSPRNG
//! - The envelope MAC is verified in constant time before decryption, and
//!   MAC and padding failures are reported through distinct but detail-free
//!   error variants

pub mod cipher;
pub mod envelope;
pub mod error;
pub mod field;
pub mod keys;
pub mod point;

pub use cipher::{decrypt, encrypt};
pub use envelope::{EncryptedEnvelope, ENVELOPE_MARKER, IV_LEN, MAC_LEN};
pub use error::CryptoError;
pub use keys::{PublicKey, KIND_ED25519, KIND_SECP256K1};
pub use point::{compress, decompress, COMPRESSED_KEY_LEN, UNCOMPRESSED_KEY_LEN};
