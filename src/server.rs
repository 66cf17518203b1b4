//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store and service, wires up the Axum router, and runs
//! the server until a shutdown signal arrives.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::MemoryUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// The mapping store is constructed here, once per process, and handed to all
/// request handlers through [`AppState`]. Nothing survives a restart.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed or bound
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(MemoryUrlRepository::new());
    let shortener = Arc::new(ShortenerService::new(repository));
    tracing::info!("In-memory mapping store initialized");

    let state = AppState::new(shortener, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
