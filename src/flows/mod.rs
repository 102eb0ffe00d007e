//! Tutoring flows
//!
//! A flow builds a domain-specific prompt from a validated input record,
//! calls the inference client, and returns a typed answer. Flows are
//! stateless: conversation history, where it exists, is supplied wholesale
//! on every call.

pub mod grammar;
pub mod lesson;

pub use grammar::{GrammarExplanationRequest, GrammarExplanationResponse};
pub use lesson::{HistoryRole, HistoryTurn, LessonChatRequest, LessonChatResponse};
