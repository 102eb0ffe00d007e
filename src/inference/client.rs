//! Workers AI client
//!
//! HTTP client for the Cloudflare Workers AI run endpoint. `run_raw` issues
//! the request and hands back the raw response; `generate` adds the status
//! check and the validated decode of the success envelope.

use serde::Serialize;
use tracing::{debug, error, instrument, warn};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    inference::types::{ChatMessage, RunRequest, RunResponse},
};

/// Client for the Workers AI REST API
pub struct WorkersAiClient {
    client: reqwest::Client,
    base_url: String,
    account_id: Option<String>,
    api_token: Option<String>,
}

impl WorkersAiClient {
    /// Create a new client from the shared HTTP client and configuration
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        let this = Self {
            client,
            base_url: config.cloudflare_api_url.clone(),
            account_id: config.cloudflare_account_id.clone(),
            api_token: config.cloudflare_api_token.clone(),
        };
        if !this.is_configured() {
            warn!("Cloudflare credentials not configured, inference calls will fail");
        }
        this
    }

    /// Check whether both account id and API token are present
    pub fn is_configured(&self) -> bool {
        self.account_id.is_some() && self.api_token.is_some()
    }

    /// Build the run URL for a model
    fn run_url(&self, account_id: &str, model: &str) -> String {
        format!("{}/accounts/{}/ai/run/{}", self.base_url, account_id, model)
    }

    /// Send a message list to the model and return the raw response
    ///
    /// Issues exactly one POST per call. The body is not read or parsed,
    /// so the relay endpoint can pass it through verbatim.
    #[instrument(skip(self, messages), fields(model = %model))]
    pub async fn run_raw<M: Serialize>(
        &self,
        model: &str,
        messages: M,
    ) -> AppResult<reqwest::Response> {
        let (account_id, api_token) = match (&self.account_id, &self.api_token) {
            (Some(account_id), Some(api_token)) => (account_id, api_token),
            _ => {
                return Err(AppError::ServiceUnavailable(
                    "CLOUDFLARE_ACCOUNT_ID and CLOUDFLARE_API_TOKEN are not configured"
                        .to_string(),
                ))
            }
        };

        let url = self.run_url(account_id, model);
        debug!(url = %url, "Sending run request to Workers AI");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_token)
            .json(&RunRequest { messages })
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to reach Workers AI");
                e
            })?;

        debug!(status = %response.status(), "Workers AI response status");
        Ok(response)
    }

    /// Run the model and decode the generated text
    ///
    /// Non-success statuses become a typed upstream error carrying the body
    /// text; a success body that does not match the run envelope becomes a
    /// decode error rather than a missing-field panic.
    pub async fn generate(&self, model: &str, messages: &[ChatMessage]) -> AppResult<String> {
        let response = self.run_raw(model, messages).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Workers AI request failed");
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: RunResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, body = %body, "Failed to decode Workers AI response");
                return Err(AppError::UpstreamDecode(format!(
                    "Unexpected Workers AI response shape: {}",
                    e
                )));
            }
        };

        Ok(parsed.result.response)
    }
}
