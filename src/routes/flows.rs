//! Flow endpoints
//!
//! JSON endpoints for the two tutoring flows. Bodies are parsed manually so
//! parse failures surface in the uniform `{ "error": ... }` shape instead of
//! the extractor's default rejection.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    flows::{
        grammar::{self, GrammarExplanationRequest, GrammarExplanationResponse},
        lesson::{self, LessonChatRequest, LessonChatResponse},
    },
    routes::metrics::record_request,
    AppState,
};

/// Read and parse a JSON flow request body
async fn parse_body<T: serde::de::DeserializeOwned>(
    request: axum::extract::Request,
) -> AppResult<T> {
    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to read request body: {}", e)))?;

    serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
}

/// Handle grammar explanation requests
pub async fn grammar_explanation(
    State(state): State<Arc<AppState>>,
    request: axum::extract::Request,
) -> AppResult<Json<GrammarExplanationResponse>> {
    let start_time = Instant::now();
    let flow_request: GrammarExplanationRequest = parse_body(request).await?;

    info!(
        topic = %flow_request.grammar_topic,
        level = %flow_request.level,
        "Processing grammar explanation request"
    );

    let model = &state.config.model;
    let result =
        grammar::generate_grammar_explanation(&state.workers_ai, model, &flow_request).await;

    let duration = start_time.elapsed().as_secs_f64();
    let outcome = if result.is_ok() { "success" } else { "error" };
    record_request("grammar_explanation", outcome, model, duration);

    result.map(Json)
}

/// Handle lesson chat requests
pub async fn lesson_chat(
    State(state): State<Arc<AppState>>,
    request: axum::extract::Request,
) -> AppResult<Json<LessonChatResponse>> {
    let start_time = Instant::now();
    let flow_request: LessonChatRequest = parse_body(request).await?;

    info!(
        lesson = %flow_request.lesson_title,
        history_turns = flow_request.history.len(),
        "Processing lesson chat request"
    );

    let model = &state.config.model;
    let result = lesson::lesson_chat(&state.workers_ai, model, &flow_request).await;

    let duration = start_time.elapsed().as_secs_f64();
    let outcome = if result.is_ok() { "success" } else { "error" };
    record_request("lesson_chat", outcome, model, duration);

    result.map(Json)
}
