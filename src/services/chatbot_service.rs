//! Chatbot service
//!
//! Questions are answered from a per-role FAQ table first (exact-key match
//! after normalization); only misses reach the external LLM behind the
//! `ChatModel` trait. Every exchange is persisted as a chat session.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::ChatbotConfig,
    constants::roles,
    db::repositories::ChatRepository,
    error::{AppError, AppResult},
    models::ChatSession,
};

/// External chat model boundary: `(question, role) -> answer`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Complete a question under a system prompt
    async fn complete(&self, system_prompt: &str, question: &str) -> AppResult<String>;
}

/// OpenAI-compatible chat completion client (Groq)
pub struct GroqChatModel {
    http: reqwest::Client,
    config: ChatbotConfig,
}

impl GroqChatModel {
    pub fn new(config: ChatbotConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: String,
}

#[async_trait]
impl ChatModel for GroqChatModel {
    async fn complete(&self, system_prompt: &str, question: &str) -> AppResult<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": 1024,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": question },
            ],
        });

        let response = self
            .http
            .post(self.config.api_url.as_str())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Chatbot(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Chatbot(format!(
                "Model API returned {}",
                response.status()
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Chatbot(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::Chatbot("Model returned no choices".to_string()))
    }
}

/// FAQ entries shown to every role
const FAQ_COMMON: &[(&str, &str)] = &[
    (
        "what are the submission stages?",
        "There are 4 submission stages: 1) Synopsis, 2) Progress Report 1, 3) Progress Report 2, 4) Final Submission.",
    ),
    (
        "how is the final score calculated?",
        "Final score = supervisor score average (0-10) + admin score (0-20), for a maximum of 30 points.",
    ),
    (
        "what is this system?",
        "ProjHub is a project management platform for student projects, submissions, and evaluations.",
    ),
    (
        "who can i contact for help?",
        "Contact your project supervisor or the department admin for assistance.",
    ),
];

/// FAQ entries for students
const FAQ_STUDENT: &[(&str, &str)] = &[
    (
        "how do i enroll in a project?",
        "Open the project and enter the enrollment token shared by your supervisor or admin.",
    ),
    (
        "how do i create a team?",
        "Go to your project dashboard, choose Create Team, set a team name, and invite members by email.",
    ),
    (
        "can i be in multiple teams?",
        "No, each student can only be in one team per project.",
    ),
    (
        "can i submit without team approval?",
        "No, all team members must approve before a submission is considered valid.",
    ),
    (
        "what happens if a team member rejects the invitation?",
        "The team remains pending. All invitations must be accepted before the team becomes active.",
    ),
];

/// FAQ entries for supervisors
const FAQ_SUPERVISOR: &[(&str, &str)] = &[
    (
        "who gives the supervisor score?",
        "The project supervisor reviews each submission and records a score from 0 to 10.",
    ),
    (
        "who gives the admin score?",
        "The department admin records the final admin score from 0 to 20.",
    ),
];

/// Chatbot service
pub struct ChatbotService;

impl ChatbotService {
    /// Answer a question: FAQ first, LLM on miss, then persist the session
    pub async fn ask(
        pool: &PgPool,
        model: &dyn ChatModel,
        user_id: &Uuid,
        role: &str,
        question: &str,
    ) -> AppResult<ChatSession> {
        let answer = Self::resolve_answer(model, role, question).await?;

        ChatRepository::insert(pool, user_id, question, &answer).await
    }

    /// FAQ-then-model resolution, independent of persistence
    pub async fn resolve_answer(
        model: &dyn ChatModel,
        role: &str,
        question: &str,
    ) -> AppResult<String> {
        if let Some(answer) = Self::faq_answer(role, question) {
            return Ok(answer.to_string());
        }

        model.complete(&Self::system_prompt(role), question).await
    }

    /// Exact-key FAQ lookup against the role's table
    pub fn faq_answer(role: &str, question: &str) -> Option<&'static str> {
        let key = question.trim().to_lowercase();

        let role_table: &[(&str, &str)] = match role {
            roles::STUDENT => FAQ_STUDENT,
            roles::SUPERVISOR | roles::ADMIN => FAQ_SUPERVISOR,
            _ => &[],
        };

        role_table
            .iter()
            .chain(FAQ_COMMON.iter())
            .find(|(q, _)| *q == key)
            .map(|(_, a)| *a)
    }

    fn system_prompt(role: &str) -> String {
        let faq: String = FAQ_COMMON
            .iter()
            .chain(FAQ_STUDENT.iter())
            .chain(FAQ_SUPERVISOR.iter())
            .map(|(q, a)| format!("Q: {}\nA: {}\n", q, a))
            .collect();

        format!(
            "You are a helpful assistant for the ProjHub project management system. \
             The user is a {}. Answer questions about projects, teams, submissions, \
             and scoring concisely. If the question is unrelated to the system, \
             politely redirect the user to the FAQ.\n\nFAQ:\n{}",
            role, faq
        )
    }

    /// A user's chat history, newest first
    pub async fn history(pool: &PgPool, user_id: &Uuid, limit: i64) -> AppResult<Vec<ChatSession>> {
        ChatRepository::list_for_user(pool, user_id, limit).await
    }

    /// Delete one of the user's sessions
    pub async fn delete_session(pool: &PgPool, id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        if !ChatRepository::delete_for_user(pool, id, user_id).await? {
            return Err(AppError::NotFound("Chat session not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_exact_key_match() {
        let answer = ChatbotService::faq_answer(roles::STUDENT, "How do I create a team?");
        assert!(answer.is_some());

        // Common entries are visible to every role
        assert!(
            ChatbotService::faq_answer(roles::SUPERVISOR, "what are the submission stages?")
                .is_some()
        );
    }

    #[test]
    fn test_faq_miss_on_unknown_question() {
        assert!(ChatbotService::faq_answer(roles::STUDENT, "what is the meaning of life?").is_none());
    }

    #[tokio::test]
    async fn test_faq_hit_short_circuits_model() {
        let mut model = MockChatModel::new();
        model.expect_complete().never();

        let answer =
            ChatbotService::resolve_answer(&model, roles::STUDENT, "can i be in multiple teams?")
                .await
                .unwrap();

        assert!(answer.contains("one team per project"));
    }

    #[tokio::test]
    async fn test_faq_miss_falls_back_to_model() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .times(1)
            .returning(|_, _| Ok("Ask your supervisor.".to_string()));

        let answer = ChatbotService::resolve_answer(
            &model,
            roles::STUDENT,
            "can my team change its name after locking?",
        )
        .await
        .unwrap();

        assert_eq!(answer, "Ask your supervisor.");
    }
}
