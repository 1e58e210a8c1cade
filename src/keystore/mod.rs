// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keystore Contract
//!
//! Supplies public keys per (protocol, network). The crypto core only ever
//! consumes [`PublicKey`] values through this seam; persistence, unlocking,
//! and key-file management live behind the trait.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::crypto::PublicKey;

/// Enumerates the public keys a user controls on a given chain.
#[async_trait]
pub trait Keystore: Send + Sync {
    /// All addressable public keys for the (protocol, network) pair.
    async fn get_addresses(&self, protocol: &str, network: &str) -> Result<Vec<PublicKey>>;
}

/// In-memory keystore double, keyed by (protocol, network).
///
/// Backs the HTTP tests and local development; nothing is persisted.
#[derive(Clone, Default)]
pub struct InMemoryKeystore {
    keys: Arc<RwLock<HashMap<(String, String), Vec<PublicKey>>>>,
}

impl InMemoryKeystore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key under a (protocol, network) pair.
    pub async fn add_key(&self, protocol: &str, network: &str, key: PublicKey) {
        let mut keys = self.keys.write().await;
        keys.entry((protocol.to_string(), network.to_string()))
            .or_default()
            .push(key);
    }
}

#[async_trait]
impl Keystore for InMemoryKeystore {
    async fn get_addresses(&self, protocol: &str, network: &str) -> Result<Vec<PublicKey>> {
        let keys = self.keys.read().await;
        Ok(keys
            .get(&(protocol.to_string(), network.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
