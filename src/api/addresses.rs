// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /api/addresses
//!
//! Enumerates the addresses the user can send and receive with on a given
//! (protocol, network). The core hands over raw key bytes and a kind tag;
//! rendering here is deliberately chain-agnostic hex. Chain-specific address
//! formats are a separate collaborator's concern.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::errors::ApiError;
use super::AppState;

/// Encoding name reported alongside every rendered address.
pub const ENCODING_HEX_0X_PREFIX: &str = "hex/0x-prefix";

#[derive(Debug, Deserialize)]
pub struct AddressesQuery {
    pub protocol: Option<String>,
    pub network: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AddressEntry {
    pub value: String,
    pub encoding: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddressesResponse {
    pub addresses: Vec<AddressEntry>,
}

pub async fn get_addresses(
    State(state): State<AppState>,
    Query(query): Query<AddressesQuery>,
) -> Result<Json<AddressesResponse>, ApiError> {
    let protocol = require_param(query.protocol, "protocol")?;
    let network = require_param(query.network, "network")?;

    let keys = state
        .keystore
        .get_addresses(&protocol, &network)
        .await
        .map_err(|e| {
            tracing::warn!(%protocol, %network, error = %e, "keystore lookup failed");
            ApiError::InternalError(e.to_string())
        })?;

    tracing::info!(%protocol, %network, count = keys.len(), "addresses listed");

    let addresses = keys
        .iter()
        .map(|key| AddressEntry {
            value: format!("0x{}", hex::encode(key.to_bytes())),
            encoding: ENCODING_HEX_0X_PREFIX.to_string(),
        })
        .collect();

    Ok(Json(AddressesResponse { addresses }))
}

fn require_param(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::missing_param(field)),
    }
}
