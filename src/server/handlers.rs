//! HTTP API handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::engine::ScanEngine;
use crate::error_handling::ScanError;

use super::types::{BatchCheckRequest, CheckUrlRequest, ErrorResponse};

/// `POST /api/check-url` — scans one URL.
///
/// Invalid input is a 400 rejection; probe degradations never fail the
/// request.
pub async fn check_url_handler(
    State(engine): State<Arc<ScanEngine>>,
    Json(request): Json<CheckUrlRequest>,
) -> Response {
    match engine.scan(&request.url, request.scan_content).await {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(e @ ScanError::InvalidUrl(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// `POST /api/check-urls-batch` — scans multiple URLs independently.
///
/// Each entry maps to either a full assessment or an error object; one URL's
/// failure never affects the others.
pub async fn check_urls_batch_handler(
    State(engine): State<Arc<ScanEngine>>,
    Json(request): Json<BatchCheckRequest>,
) -> Response {
    let results = engine.scan_batch(&request.urls).await;

    let body: HashMap<String, serde_json::Value> = results
        .into_iter()
        .map(|(url, result)| {
            let value = match result {
                Ok(assessment) => {
                    serde_json::to_value(&assessment).unwrap_or_else(|e| {
                        json!({"error": format!("serialization failed: {e}")})
                    })
                }
                Err(e) => json!({"error": e.to_string()}),
            };
            (url, value)
        })
        .collect();

    (StatusCode::OK, Json(body)).into_response()
}

/// `GET /health` — liveness probe.
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(json!({"status": "ok"}))).into_response()
}
