//! API route handlers
//!
//! - `health`: Health checks, readiness, and metrics
//! - `strings`: The `/strings` resource

pub mod health;
pub mod strings;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// This is the root endpoint (GET /).
///
/// # Response
///
/// ```json
/// {
///   "name": "stringlens server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "stringlens server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /strings",
            "GET /strings",
            "GET /strings/filter-by-natural-language",
            "GET /strings/{string_value}",
            "DELETE /strings/{string_value}",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound("no such route".to_string())
}
