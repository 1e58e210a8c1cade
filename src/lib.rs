// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod crypto;
pub mod keystore;
pub mod stores;

// Re-export the crypto core surface
pub use crypto::{
    decrypt, encrypt, CryptoError, EncryptedEnvelope, PublicKey, KIND_ED25519, KIND_SECP256K1,
};

// Re-export collaborator seams
pub use keystore::{InMemoryKeystore, Keystore};
pub use stores::{InMemoryState, State, Transaction};
