//! Addresses endpoint tests against the in-memory keystore double.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use keymail_node::api::{router, AddressesResponse, AppState, ErrorResponse};
use keymail_node::crypto::PublicKey;
use keymail_node::keystore::{InMemoryKeystore, Keystore};
use rand::rngs::OsRng;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_get_addresses_renders_keys() {
    let keystore = InMemoryKeystore::new();
    let ed_key =
        PublicKey::from_ed25519_secret(&ed25519_dalek::SigningKey::generate(&mut OsRng));
    let ec_key = PublicKey::from_secp256k1_secret(&k256::SecretKey::random(&mut OsRng));
    keystore.add_key("ethereum", "mainnet", ed_key.clone()).await;
    keystore.add_key("ethereum", "mainnet", ec_key.clone()).await;

    let app = router(AppState {
        keystore: Arc::new(keystore),
    });

    let response = app
        .oneshot(
            Request::get("/api/addresses?protocol=ethereum&network=mainnet")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: AddressesResponse = body_json(response).await;
    assert_eq!(body.addresses.len(), 2);
    for (entry, key) in body.addresses.iter().zip([&ed_key, &ec_key]) {
        assert_eq!(entry.value, format!("0x{}", hex::encode(key.to_bytes())));
        assert_eq!(entry.encoding, "hex/0x-prefix");
    }
}

#[tokio::test]
async fn test_get_addresses_empty_keystore() {
    let app = router(AppState {
        keystore: Arc::new(InMemoryKeystore::new()),
    });

    let response = app
        .oneshot(
            Request::get("/api/addresses?protocol=ethereum&network=mainnet")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: AddressesResponse = body_json(response).await;
    assert!(body.addresses.is_empty());
}

#[tokio::test]
async fn test_missing_params_are_unprocessable() {
    for uri in [
        "/api/addresses",
        "/api/addresses?protocol=ethereum",
        "/api/addresses?network=mainnet",
        "/api/addresses?protocol=&network=mainnet",
    ] {
        let app = router(AppState {
            keystore: Arc::new(InMemoryKeystore::new()),
        });
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "uri: {}",
            uri
        );

        let body: ErrorResponse = body_json(response).await;
        assert_eq!(body.error_type, "validation_error");
    }
}

struct FailingKeystore;

#[async_trait]
impl Keystore for FailingKeystore {
    async fn get_addresses(&self, _protocol: &str, _network: &str) -> Result<Vec<PublicKey>> {
        Err(anyhow!("keystore backend unavailable"))
    }
}

#[tokio::test]
async fn test_keystore_failure_is_internal_error() {
    let app = router(AppState {
        keystore: Arc::new(FailingKeystore),
    });

    let response = app
        .oneshot(
            Request::get("/api/addresses?protocol=ethereum&network=mainnet")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorResponse = body_json(response).await;
    assert_eq!(body.error_type, "internal_error");
}

#[tokio::test]
async fn test_health() {
    let app = router(AppState {
        keystore: Arc::new(InMemoryKeystore::new()),
    });
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
