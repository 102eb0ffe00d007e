//! Health check endpoints
//!
//! - `/health` - liveness check, always `{ "ok": true }`
//! - `/health/ready` - readiness probe reporting credential configuration

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
}

/// Liveness check endpoint
///
/// Always returns `{ "ok": true }`, regardless of upstream credential
/// presence. The upstream API is never probed.
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { ok: true }))
}

/// Readiness probe endpoint
///
/// Reports whether the service is configured to reach Workers AI. Without
/// credentials every inference call fails with 503, so orchestrators can
/// hold traffic until the secrets land.
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    if state.workers_ai.is_configured() {
        (StatusCode::OK, Json(ReadinessResponse { status: "ready" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "unconfigured",
            }),
        )
    }
}
