//! Mock Workers AI server for testing
//!
//! Provides a wiremock-based stand-in for the Cloudflare Workers AI run
//! endpoint: `POST /accounts/{account_id}/ai/run/{model}`.
//!
//! # Example
//!
//! ```rust,ignore
//! let upstream = MockWorkersAi::start().await;
//! upstream.mock_run_success("acc-123", "@cf/meta/llama-3-8b-instruct", "مرحبا").await;
//! // Point CLOUDFLARE_API_URL at upstream.uri()
//! ```

#![allow(dead_code)]

use serde_json::json;
use wiremock::{
    matchers::{header, method, path, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Workers AI server wrapper
pub struct MockWorkersAi {
    server: MockServer,
}

impl MockWorkersAi {
    /// Start a new mock Workers AI server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful run for a specific account and model
    ///
    /// Matches the exact run path and requires the bearer token header, so
    /// a client that builds the wrong URL or drops auth gets a 404 instead
    /// of a canned success.
    pub async fn mock_run_success(
        &self,
        account_id: &str,
        api_token: &str,
        model: &str,
        response_text: &str,
    ) {
        Mock::given(method("POST"))
            .and(path(format!("/accounts/{}/ai/run/{}", account_id, model)))
            .and(header("Authorization", format!("Bearer {}", api_token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": { "response": response_text },
                "success": true,
                "errors": [],
                "messages": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an upstream failure with the given status and body text
    pub async fn mock_run_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path_regex(r"^/accounts/.+/ai/run/.+"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 whose body does not match the run envelope
    pub async fn mock_run_malformed(&self) {
        Mock::given(method("POST"))
            .and(path_regex(r"^/accounts/.+/ai/run/.+"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .mount(&self.server)
            .await;
    }

    /// Return every run request the mock has received so far
    pub async fn received_run_requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path().contains("/ai/run/"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_starts() {
        let mock = MockWorkersAi::start().await;
        assert!(!mock.uri().is_empty());
    }

    #[tokio::test]
    async fn test_mock_run_success_roundtrip() {
        let mock = MockWorkersAi::start().await;
        mock.mock_run_success("acc-123", "test-token", "@cf/meta/llama-3-8b-instruct", "أهلاً")
            .await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!(
                "{}/accounts/acc-123/ai/run/@cf/meta/llama-3-8b-instruct",
                mock.uri()
            ))
            .bearer_auth("test-token")
            .json(&json!({ "messages": [{ "role": "user", "content": "hi" }] }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["result"]["response"], "أهلاً");

        let received = mock.received_run_requests().await;
        assert_eq!(received.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_run_error_passes_body_through() {
        let mock = MockWorkersAi::start().await;
        mock.mock_run_error(429, "model is overloaded").await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/accounts/x/ai/run/some-model", mock.uri()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 429);
        assert_eq!(response.text().await.unwrap(), "model is overloaded");
    }
}
