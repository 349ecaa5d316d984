//! API route handlers
//!
//! - `health`: Health checks, readiness, and metrics
//! - `visualize`: 3D layout of stored embeddings

pub mod health;
pub mod visualize;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Codex Synapse Visualization Server",
        "service": health::SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /api/visualize",
            "GET /health",
            "GET /ready",
            "GET /metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns the standard error body for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
