//! Configuration management for Murshid
//!
//! Configuration is loaded from environment variables once at startup and
//! injected into the application state; nothing reads the environment after
//! that point.

use anyhow::{Context, Result};
use std::env;

use crate::inference::types::DEFAULT_MODEL;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Cloudflare API base URL
    pub cloudflare_api_url: String,
    /// Cloudflare account id (required for upstream calls, optional at startup)
    pub cloudflare_account_id: Option<String>,
    /// Cloudflare API token (required for upstream calls, optional at startup)
    pub cloudflare_api_token: Option<String>,

    /// Workers AI model identifier used by every flow and the relay
    pub model: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("MURSHID_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("MURSHID_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid MURSHID_PORT")?,

            cloudflare_api_url: env::var("CLOUDFLARE_API_URL")
                .unwrap_or_else(|_| "https://api.cloudflare.com/client/v4".to_string()),
            cloudflare_account_id: env::var("CLOUDFLARE_ACCOUNT_ID").ok(),
            cloudflare_api_token: env::var("CLOUDFLARE_API_TOKEN").ok(),

            model: env::var("WORKERS_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}
