//! Lesson chat flow
//!
//! Contextual Q&A about a lesson the learner is currently studying. The
//! caller supplies the lesson context and the full prior history on every
//! call; nothing is kept server-side between turns.

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    inference::{ChatMessage, Role, WorkersAiClient},
};

/// Fixed tutor persona for lesson chat, with lesson context interpolated
fn lesson_persona(title: &str, explanation: &str) -> String {
    format!(
        "You are a helpful English tutor for Arabic-speaking students. The student is \
studying the lesson \"{}\". Lesson summary: {}. Answer the student's questions about this \
lesson in Modern Standard Arabic, keeping English examples in English.",
        title, explanation
    )
}

/// Role of a prior history turn
///
/// The client-side store records the model's turns under the role `model`;
/// the wire API only knows `assistant`, so the translation happens here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    User,
    Model,
}

impl From<HistoryRole> for Role {
    fn from(role: HistoryRole) -> Self {
        match role {
            HistoryRole::User => Role::User,
            HistoryRole::Model => Role::Assistant,
        }
    }
}

/// A single prior turn of the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: HistoryRole,
    pub content: String,
}

/// Flow input
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonChatRequest {
    pub lesson_title: String,
    #[serde(default)]
    pub lesson_explanation: String,
    #[serde(default)]
    pub history: Vec<HistoryTurn>,
    pub question: String,
}

impl LessonChatRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.lesson_title.trim().is_empty() {
            return Err(AppError::BadRequest("lessonTitle is required".to_string()));
        }
        if self.question.trim().is_empty() {
            return Err(AppError::BadRequest("question is required".to_string()));
        }
        Ok(())
    }
}

/// Flow output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonChatResponse {
    pub answer: String,
}

/// Build the prompt: persona, translated history in order, then the question
pub fn build_messages(request: &LessonChatRequest) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(request.history.len() + 2);

    messages.push(ChatMessage::system(lesson_persona(
        &request.lesson_title,
        &request.lesson_explanation,
    )));

    for turn in &request.history {
        messages.push(ChatMessage {
            role: turn.role.into(),
            content: turn.content.clone(),
        });
    }

    messages.push(ChatMessage::user(request.question.clone()));
    messages
}

/// Run the lesson chat flow
pub async fn lesson_chat(
    client: &WorkersAiClient,
    model: &str,
    request: &LessonChatRequest,
) -> AppResult<LessonChatResponse> {
    request.validate()?;

    let messages = build_messages(request);
    let answer = client.generate(model, &messages).await?;

    Ok(LessonChatResponse { answer })
}
