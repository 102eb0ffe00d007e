//! Grammar explanation flow
//!
//! Given an English grammar topic and a learner level, asks the model for an
//! explanation in Modern Standard Arabic. The prompt is always exactly two
//! turns: the tutor persona followed by the interpolated request.

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    inference::{ChatMessage, WorkersAiClient},
};

/// Fixed tutor persona for grammar explanations
const GRAMMAR_PERSONA: &str = "You are an expert English language teacher for Arabic-speaking \
students. Explain English grammar in clear Modern Standard Arabic, keeping English grammar \
terms and example sentences in English. Be friendly and concise.";

/// Flow input
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarExplanationRequest {
    pub grammar_topic: String,
    pub level: String,
}

impl GrammarExplanationRequest {
    /// Reject empty fields before any upstream call is made
    pub fn validate(&self) -> AppResult<()> {
        if self.grammar_topic.trim().is_empty() {
            return Err(AppError::BadRequest("grammarTopic is required".to_string()));
        }
        if self.level.trim().is_empty() {
            return Err(AppError::BadRequest("level is required".to_string()));
        }
        Ok(())
    }
}

/// Flow output: the model reply, unmodified
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarExplanationResponse {
    pub arabic_explanation: String,
}

/// Build the two-turn prompt for a grammar explanation
pub fn build_messages(request: &GrammarExplanationRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(GRAMMAR_PERSONA),
        ChatMessage::user(format!(
            "Explain the English grammar topic \"{}\" to a {} student. \
Include simple example sentences with Arabic translations.",
            request.grammar_topic, request.level
        )),
    ]
}

/// Run the grammar explanation flow
pub async fn generate_grammar_explanation(
    client: &WorkersAiClient,
    model: &str,
    request: &GrammarExplanationRequest,
) -> AppResult<GrammarExplanationResponse> {
    request.validate()?;

    let messages = build_messages(request);
    let answer = client.generate(model, &messages).await?;

    Ok(GrammarExplanationResponse {
        arabic_explanation: answer,
    })
}
