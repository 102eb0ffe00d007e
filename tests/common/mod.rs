//! Common test utilities for Murshid
//!
//! Shared fixtures and the end-to-end test harness used across the
//! integration suite.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;

use murshid::{routes, AppState, Config};

use crate::mocks::workers_ai::MockWorkersAi;

/// Test configuration constants
pub mod constants {
    /// Default test Cloudflare account id
    pub const TEST_ACCOUNT_ID: &str = "acc-test-123";
    /// Default test Cloudflare API token
    pub const TEST_API_TOKEN: &str = "test-cf-api-token";
    /// Model identifier used by all flows
    pub const TEST_MODEL: &str = "@cf/meta/llama-3-8b-instruct";
}

/// Create a config pointing at a mock upstream
pub fn test_config(upstream_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        cloudflare_api_url: upstream_url.to_string(),
        cloudflare_account_id: Some(constants::TEST_ACCOUNT_ID.to_string()),
        cloudflare_api_token: Some(constants::TEST_API_TOKEN.to_string()),
        model: constants::TEST_MODEL.to_string(),
    }
}

/// End-to-end test harness
///
/// Runs the real router and app state against a wiremock Workers AI
/// upstream:
///
/// ```ignore
/// let harness = TestHarness::new().await;
/// harness.mock_success("النص").await;
/// let response = harness.server.post("/api/chat").json(&request).await;
/// ```
pub struct TestHarness {
    pub server: TestServer,
    pub upstream: MockWorkersAi,
}

impl TestHarness {
    /// Create a harness with credentials configured
    pub async fn new() -> Self {
        let upstream = MockWorkersAi::start().await;
        let config = test_config(&upstream.uri());
        Self::with_config(upstream, config)
    }

    /// Create a harness with no upstream credentials configured
    pub async fn new_unconfigured() -> Self {
        let upstream = MockWorkersAi::start().await;
        let mut config = test_config(&upstream.uri());
        config.cloudflare_account_id = None;
        config.cloudflare_api_token = None;
        Self::with_config(upstream, config)
    }

    fn with_config(upstream: MockWorkersAi, config: Config) -> Self {
        let state = Arc::new(AppState::new_for_testing(config));
        let app = routes::create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, upstream }
    }

    /// Mount a successful upstream response for the test account and model
    pub async fn mock_success(&self, response_text: &str) {
        self.upstream
            .mock_run_success(
                constants::TEST_ACCOUNT_ID,
                constants::TEST_API_TOKEN,
                constants::TEST_MODEL,
                response_text,
            )
            .await;
    }

    /// Parse the JSON body of the single run request the upstream received
    pub async fn single_run_request_body(&self) -> serde_json::Value {
        let requests = self.upstream.received_run_requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one upstream call");
        serde_json::from_slice(&requests[0].body).expect("upstream request body was not JSON")
    }
}
