//! Cloudflare Workers AI integration
//!
//! This module owns the outbound side of the service: the wire types for
//! chat messages and the HTTP client that talks to the Workers AI REST API.

pub mod client;
pub mod types;

pub use client::WorkersAiClient;
pub use types::{ChatMessage, Role, RunRequest, RunResponse, RunResult, DEFAULT_MODEL};
