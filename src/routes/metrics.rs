//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

/// Register all custom metrics
fn register_metrics() {
    metrics::describe_counter!(
        "murshid_requests_total",
        "Total number of requests processed, by endpoint and outcome"
    );
    metrics::describe_histogram!(
        "murshid_request_duration_seconds",
        "Request duration in seconds, by endpoint"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns metrics in Prometheus text format for scraping.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a completed request
pub fn record_request(endpoint: &'static str, outcome: &str, model: &str, duration_secs: f64) {
    metrics::counter!(
        "murshid_requests_total",
        "endpoint" => endpoint,
        "outcome" => outcome.to_string(),
        "model" => model.to_string()
    )
    .increment(1);
    metrics::histogram!("murshid_request_duration_seconds", "endpoint" => endpoint)
        .record(duration_secs);
}
