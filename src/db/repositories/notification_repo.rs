//! Notification repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Notification};

/// Repository for persisted notification intents
pub struct NotificationRepository;

impl NotificationRepository {
    /// Insert a notification row
    pub async fn insert(
        pool: &PgPool,
        user_id: &Uuid,
        kind: &str,
        title: &str,
        body: &str,
    ) -> AppResult<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (user_id, kind, title, body)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(kind)
        .bind(title)
        .bind(body)
        .fetch_one(pool)
        .await?;

        Ok(notification)
    }

    /// List a user's notifications, newest first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(notifications)
    }

    /// Mark one of the user's notifications as read
    pub async fn mark_read(
        pool: &PgPool,
        id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(notification)
    }
}
