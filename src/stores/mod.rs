//! Message State Store Contract
//!
//! Persistence seams for per-message read state and for the transactions a
//! message traveled in. Modeled as an explicit trait with an in-memory
//! double rather than generated record-and-replay mocks.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// A chain transaction that carried an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Envelope wire bytes carried in the transaction.
    pub data: Vec<u8>,
    /// Block the transaction was included in.
    pub block_number: u64,
    /// Transaction hash.
    pub hash: Vec<u8>,
}

/// Read-state and transaction persistence, one method per operation.
#[async_trait]
pub trait State: Send + Sync {
    async fn put_message_read(&self, message_id: &[u8]) -> Result<()>;
    async fn delete_message_read(&self, message_id: &[u8]) -> Result<()>;
    async fn get_read_status(&self, message_id: &[u8]) -> Result<bool>;
    async fn put_transaction(
        &self,
        protocol: &str,
        network: &str,
        address: &[u8],
        tx: Transaction,
    ) -> Result<()>;
    async fn get_transactions(
        &self,
        protocol: &str,
        network: &str,
        address: &[u8],
    ) -> Result<Vec<Transaction>>;
}

type TransactionKey = (String, String, Vec<u8>);

/// In-memory [`State`] double for tests and local development.
#[derive(Clone, Default)]
pub struct InMemoryState {
    read: Arc<RwLock<HashSet<Vec<u8>>>>,
    transactions: Arc<RwLock<HashMap<TransactionKey, Vec<Transaction>>>>,
}

impl InMemoryState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl State for InMemoryState {
    async fn put_message_read(&self, message_id: &[u8]) -> Result<()> {
        self.read.write().await.insert(message_id.to_vec());
        Ok(())
    }

    async fn delete_message_read(&self, message_id: &[u8]) -> Result<()> {
        self.read.write().await.remove(message_id);
        Ok(())
    }

    async fn get_read_status(&self, message_id: &[u8]) -> Result<bool> {
        Ok(self.read.read().await.contains(message_id))
    }

    async fn put_transaction(
        &self,
        protocol: &str,
        network: &str,
        address: &[u8],
        tx: Transaction,
    ) -> Result<()> {
        let key = (protocol.to_string(), network.to_string(), address.to_vec());
        self.transactions.write().await.entry(key).or_default().push(tx);
        Ok(())
    }

    async fn get_transactions(
        &self,
        protocol: &str,
        network: &str,
        address: &[u8],
    ) -> Result<Vec<Transaction>> {
        let key = (protocol.to_string(), network.to_string(), address.to_vec());
        Ok(self
            .transactions
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}
