//! Chatbot response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::ChatSession;

/// Chatbot answer with its persisted session id
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub session_id: Uuid,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// One history entry
#[derive(Debug, Serialize)]
pub struct ChatSessionResponse {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl From<ChatSession> for ChatSessionResponse {
    fn from(session: ChatSession) -> Self {
        Self {
            id: session.id,
            question: session.question,
            answer: session.answer,
            created_at: session.created_at,
        }
    }
}
