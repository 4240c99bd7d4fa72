//! Chat session repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::ChatSession};

/// Repository for chatbot session persistence
pub struct ChatRepository;

impl ChatRepository {
    /// Store a question/answer exchange
    pub async fn insert(
        pool: &PgPool,
        user_id: &Uuid,
        question: &str,
        answer: &str,
    ) -> AppResult<ChatSession> {
        let session = sqlx::query_as::<_, ChatSession>(
            r#"
            INSERT INTO chat_sessions (user_id, question, answer)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(question)
        .bind(answer)
        .fetch_one(pool)
        .await?;

        Ok(session)
    }

    /// List a user's chat history, newest first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &Uuid,
        limit: i64,
    ) -> AppResult<Vec<ChatSession>> {
        let sessions = sqlx::query_as::<_, ChatSession>(
            r#"
            SELECT * FROM chat_sessions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(sessions)
    }

    /// Delete one of the user's sessions; returns whether a row was removed
    pub async fn delete_for_user(pool: &PgPool, id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM chat_sessions WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
