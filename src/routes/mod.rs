//! HTTP routes for Murshid
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod flows;
pub mod health;
pub mod metrics;
pub mod relay;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes, all forwarding to Workers AI
    let api_routes = Router::new()
        .route("/api/chat", post(relay::relay_chat))
        .route(
            "/api/flows/grammar-explanation",
            post(flows::grammar_explanation),
        )
        .route("/api/flows/lesson-chat", post(flows::lesson_chat));

    // Public routes (health checks, metrics)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (applied to all routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
