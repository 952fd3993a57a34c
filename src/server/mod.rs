//! HTTP API exposing the scoring engine.
//!
//! Provides three endpoints:
//! - `POST /api/check-url` - scan one URL
//! - `POST /api/check-urls-batch` - scan multiple URLs independently
//! - `GET /health` - liveness probe
//!
//! Persistence, authentication, and notification dispatch are collaborator
//! concerns; this layer only serializes engine output.

mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::engine::ScanEngine;

use handlers::{check_url_handler, check_urls_batch_handler, health_handler};
pub use types::{BatchCheckRequest, CheckUrlRequest, ErrorResponse};

/// Builds the API router for a shared engine instance.
pub fn build_router(engine: Arc<ScanEngine>) -> Router {
    Router::new()
        .route("/api/check-url", post(check_url_handler))
        .route("/api/check-urls-batch", post(check_urls_batch_handler))
        .route("/health", get(health_handler))
        .with_state(engine)
}

/// Binds and serves the API on `127.0.0.1:<port>`.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails.
pub async fn start_server(port: u16, engine: Arc<ScanEngine>) -> Result<(), anyhow::Error> {
    let app = build_router(engine);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to port {}: {}", port, e))?;

    log::info!("API server listening on http://127.0.0.1:{}/", port);
    log::info!("  - Scan: POST http://127.0.0.1:{}/api/check-url", port);
    log::info!(
        "  - Batch: POST http://127.0.0.1:{}/api/check-urls-batch",
        port
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
