//! Health check

use axum::{http::header, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;

use super::CACHE_CONTROL;
use crate::feed::iso8601;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// GET /health
///
/// Never touches the bounty API.
pub async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(HealthResponse {
            status: "ok",
            timestamp: iso8601(Utc::now()),
        }),
    )
}
