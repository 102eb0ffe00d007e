//! Error types for Murshid
//!
//! This module defines custom error types used throughout the application.
//! Every failure serializes to the same wire shape, `{ "error": "<text>" }`,
//! which the relay contract requires for upstream failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Upstream returned a non-success status; the body text is relayed
    #[error("Upstream error {status}")]
    Upstream { status: u16, body: String },

    #[error("Upstream decode error: {0}")]
    UpstreamDecode(String),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            // Upstream failures surface as 500 with the upstream body text embedded
            AppError::Upstream { body, .. } => (StatusCode::INTERNAL_SERVER_ERROR, body),
            AppError::UpstreamDecode(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::HttpError(_) => (
                StatusCode::BAD_GATEWAY,
                "Upstream service error".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
