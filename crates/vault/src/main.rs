//! `txn-vault` — service binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise the telemetry pipeline (tracing, optional OTLP export).
//! 3. Create the record store.
//! 4. Build the Axum router and start the HTTP server.

mod config;
mod server;
mod store;
mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use config::Config;
use server::middleware::Limits;
use server::state::AppState;
use store::InMemoryRecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(cfg.otel_exporter_otlp_endpoint.as_deref(), &cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        listen_port = cfg.listen_port,
        "txn-vault starting"
    );

    // -----------------------------------------------------------------------
    // 3. Record store
    // -----------------------------------------------------------------------
    let store = Arc::new(InMemoryRecordStore::new());

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let limits = Limits {
        request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        max_body_bytes: cfg.max_body_bytes,
    };
    let state = AppState::new(store, cfg.master_key_hex.clone());
    let router = server::router::build(state, limits);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.listen_port).into();
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
