//! Murshid - AI tutoring relay for Arabic-speaking English learners
//!
//! This library provides the core functionality for the Murshid service:
//! typed tutoring flows (grammar explanation, lesson chat) and a raw chat
//! relay, all forwarding to Cloudflare Workers AI.

pub mod config;
pub mod error;
pub mod flows;
pub mod inference;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::inference::WorkersAiClient;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    /// Client for the Workers AI run endpoint
    pub workers_ai: Arc<WorkersAiClient>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // HTTP client with connection pooling; the request timeout is the
        // only transport-level policy applied to upstream calls
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(std::time::Duration::from_secs(300))
            .build()?;

        let workers_ai = Arc::new(WorkersAiClient::new(http_client, &config));

        Ok(Self { config, workers_ai })
    }

    /// Create application state for testing against a mock upstream
    ///
    /// Takes a config whose `cloudflare_api_url` points at a wiremock
    /// server; everything else is wired exactly as in production.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config) -> Self {
        let http_client = reqwest::Client::new();
        let workers_ai = Arc::new(WorkersAiClient::new(http_client, &config));

        Self { config, workers_ai }
    }
}
