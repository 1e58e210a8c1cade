// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use keymail_node::api::{start_server, AppState};
use keymail_node::keystore::InMemoryKeystore;

#[derive(Parser, Debug)]
#[command(name = "keymail-node", about = "Key-addressed encrypted messaging node")]
struct Args {
    /// Address the HTTP API binds to
    #[arg(long, env = "KEYMAIL_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // The in-memory keystore is the development backend; a persistent
    // keystore plugs in through the same trait.
    let state = AppState {
        keystore: Arc::new(InMemoryKeystore::new()),
    };

    start_server(args.bind, state).await
}
