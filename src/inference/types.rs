//! Wire types for the Workers AI chat API
//!
//! Defines the message types sent to the model and the response envelope
//! the API returns. Roles form a closed set; anything else is rejected at
//! deserialization time.

use serde::{Deserialize, Serialize};

/// Default model used by every flow and the relay endpoint.
pub const DEFAULT_MODEL: &str = "@cf/meta/llama-3-8b-instruct";

/// Role of a message participant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message providing instructions or context
    System,
    /// User message from the learner
    User,
    /// Assistant message from the model
    Assistant,
}

/// A chat message with role and content
///
/// An ordered `Vec<ChatMessage>` is a conversation; order determines the
/// prompt context the model sees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for `POST .../ai/run/{model}`
///
/// Generic over the message payload: flows send typed `&[ChatMessage]`,
/// the relay forwards the caller's JSON untouched.
#[derive(Debug, Clone, Serialize)]
pub struct RunRequest<M: Serialize> {
    pub messages: M,
}

/// Success envelope returned by Workers AI
///
/// The API wraps the generated text as `{ "result": { "response": "..." } }`.
/// Extra envelope fields (`success`, `errors`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RunResponse {
    pub result: RunResult,
}

/// Inner result payload carrying the generated text
#[derive(Debug, Clone, Deserialize)]
pub struct RunResult {
    pub response: String,
}
