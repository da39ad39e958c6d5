//! # mergingtond — Mergington High activity directory daemon
//!
//! Composition root that wires the application together and starts the
//! server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialize the `tracing` subscriber
//! - Seed the activity catalog and construct the directory service
//! - Build the axum router, injecting the service through [`AppState`]
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use mergington_adapter_http_axum::state::AppState;
use mergington_app::seed;
use mergington_app::services::directory_service::DirectoryService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let directory = DirectoryService::new(seed::default_catalog());
    let state = AppState::new(directory);
    let app = mergington_adapter_http_axum::router::build(state, &config.static_assets.dir);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "mergingtond listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
    }
    tracing::info!("shutdown signal received");
}
