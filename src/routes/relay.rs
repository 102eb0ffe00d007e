//! Chat relay endpoint
//!
//! `POST /api/chat` forwards a caller's message list to Workers AI with
//! minimal transformation and relays the upstream JSON verbatim. The
//! message shape is not validated locally; malformed input is the upstream
//! API's to reject.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
};
use bytes::Bytes;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    routes::metrics::record_request,
    AppState,
};

/// Canned greeting used when the caller supplies no `messages`
fn default_greeting() -> Value {
    json!([{ "role": "user", "content": "Hello" }])
}

/// Handle relayed chat requests
///
/// An unparseable or empty body degrades to an empty object, and a missing
/// `messages` field degrades to a single canned greeting turn; either way
/// the upstream call is still made.
pub async fn relay_chat(
    State(state): State<Arc<AppState>>,
    request: axum::extract::Request,
) -> AppResult<Response> {
    let start_time = Instant::now();

    let body: Bytes = request
        .into_body()
        .collect()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to read request body: {}", e)))?
        .to_bytes();

    let body_json: Value = serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));
    let messages = match body_json.get("messages") {
        Some(messages) => messages.clone(),
        None => default_greeting(),
    };

    let model = state.config.model.clone();
    info!(model = %model, "Relaying chat request to Workers AI");

    let upstream = state.workers_ai.run_raw(&model, &messages).await?;
    let status = upstream.status();
    let duration = start_time.elapsed().as_secs_f64();

    if !status.is_success() {
        let text = upstream.text().await.unwrap_or_default();
        warn!(status = %status, "Upstream rejected relayed chat request");
        record_request("relay", "upstream_error", &model, duration);
        return Err(AppError::Upstream {
            status: status.as_u16(),
            body: text,
        });
    }

    record_request("relay", "success", &model, duration);

    // Upstream JSON passes through untouched, always as 200
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from_stream(upstream.bytes_stream()))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))
}
