//! Proposta PagBank Server
//!
//! Serves the intake form and renders commercial proposals as PDF.
//!
//! Usage:
//!   cargo run --bin proposta_pagbank
//!
//! Environment:
//!   PORT                - Server port (default: 3000)
//!   PROPOSTA_HOST       - Server host (default: 0.0.0.0)
//!   PROPOSTA_LOGO_PATH  - Logo PNG (default: public/logo-pagbank.png)
//!   PROPOSTA_INDEX_PATH - Intake form (default: views/index.html)
//!   RUST_LOG            - Log filter (default: info)

use proposta_pagbank::api::{create_router, AppState};
use proposta_pagbank::utils::constants::{APP_NAME, APP_VERSION};
use proposta_pagbank::ServerConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    info!("{} v{} starting", APP_NAME, APP_VERSION);

    let config = ServerConfig::from_env()?;

    let state = match AppState::load(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!(code = e.code_str(), fatal = e.code.is_fatal(), "{}", e);
            return Err(e.into());
        }
    };

    let app = create_router(state);
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Listening on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /          - Intake form");
    info!("  POST /gerar-pdf - Proposal PDF download");
    info!("  GET  /health    - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} shutdown complete", APP_NAME);
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl+C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
