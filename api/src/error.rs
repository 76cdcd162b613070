//! Unified error types for the bounty feed API
//!
//! This module defines error types for each layer:
//! - `FetchError`: upstream bounty API client errors
//! - `RenderError`: feed serialization errors
//! - `AppError`: request boundary errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Bounty API client errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status}")]
    Status { status: u16 },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Feed serialization errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("RSS error: {0}")]
    Rss(#[from] rss::Error),

    #[error("Atom error: {0}")]
    Atom(#[from] atom_syndication::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid UTF-8 in feed output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Render(#[from] RenderError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Fetch(e) => tracing::error!("Bounty API error: {}", e),
            AppError::Render(e) => tracing::error!("Feed render error: {}", e),
        }

        // The feed is public, read-only data, so the message is passed through as-is
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
