// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! IronPulse API Server
//!
//! Serves the gym management REST API backed by an in-memory database.

use ironpulse::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        seed_demo_data = config.seed_demo_data,
        "Starting IronPulse API"
    );

    // Build shared state (admin account + optional demo data)
    let state = Arc::new(AppState::seeded(config.clone())?);
    tracing::info!(
        plans = state.db.plans().len(),
        members = state.db.members().len(),
        "Database ready"
    );

    // Build router
    let app = ironpulse::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ironpulse=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
