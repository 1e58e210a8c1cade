// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP Boundary
//!
//! Thin adapter over the keystore collaborator. Errors use one JSON envelope
//! everywhere: 422 for missing or invalid query parameters, 500 for
//! downstream failures.

pub mod addresses;
pub mod errors;
pub mod server;

use std::sync::Arc;

use crate::keystore::Keystore;

pub use addresses::{AddressEntry, AddressesResponse, ENCODING_HEX_0X_PREFIX};
pub use errors::{ApiError, ErrorResponse};
pub use server::{router, start_server};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub keystore: Arc<dyn Keystore>,
}
