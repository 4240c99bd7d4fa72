//! Submission feedback repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::SubmissionFeedback};

/// Repository for submission feedback database operations
pub struct FeedbackRepository;

impl FeedbackRepository {
    /// Find the live supervisor-feedback row for a submission
    pub async fn find_supervisor_row(
        pool: &PgPool,
        submission_id: &Uuid,
    ) -> AppResult<Option<SubmissionFeedback>> {
        let feedback = sqlx::query_as::<_, SubmissionFeedback>(
            r#"
            SELECT * FROM submission_feedback
            WHERE submission_id = $1 AND supervisor_id IS NOT NULL
            "#,
        )
        .bind(submission_id)
        .fetch_optional(pool)
        .await?;

        Ok(feedback)
    }

    /// Find the live admin-feedback row for a submission
    pub async fn find_admin_row(
        pool: &PgPool,
        submission_id: &Uuid,
    ) -> AppResult<Option<SubmissionFeedback>> {
        let feedback = sqlx::query_as::<_, SubmissionFeedback>(
            r#"
            SELECT * FROM submission_feedback
            WHERE submission_id = $1 AND admin_id IS NOT NULL
            "#,
        )
        .bind(submission_id)
        .fetch_optional(pool)
        .await?;

        Ok(feedback)
    }

    /// Insert a supervisor-feedback row
    pub async fn insert_supervisor(
        pool: &PgPool,
        submission_id: &Uuid,
        supervisor_id: &Uuid,
        score: f64,
        comments: Option<&str>,
        resubmission_deadline: Option<DateTime<Utc>>,
    ) -> AppResult<SubmissionFeedback> {
        let feedback = sqlx::query_as::<_, SubmissionFeedback>(
            r#"
            INSERT INTO submission_feedback
                (submission_id, supervisor_id, supervisor_score, comments, resubmission_deadline)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(submission_id)
        .bind(supervisor_id)
        .bind(score)
        .bind(comments)
        .bind(resubmission_deadline)
        .fetch_one(pool)
        .await?;

        Ok(feedback)
    }

    /// Replace score/comments/deadline on an existing supervisor row
    pub async fn update_supervisor(
        pool: &PgPool,
        id: &Uuid,
        supervisor_id: &Uuid,
        score: f64,
        comments: Option<&str>,
        resubmission_deadline: Option<DateTime<Utc>>,
    ) -> AppResult<SubmissionFeedback> {
        let feedback = sqlx::query_as::<_, SubmissionFeedback>(
            r#"
            UPDATE submission_feedback
            SET
                supervisor_id = $2,
                supervisor_score = $3,
                comments = $4,
                resubmission_deadline = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(supervisor_id)
        .bind(score)
        .bind(comments)
        .bind(resubmission_deadline)
        .fetch_one(pool)
        .await?;

        Ok(feedback)
    }

    /// Insert an admin-feedback row
    pub async fn insert_admin(
        pool: &PgPool,
        submission_id: &Uuid,
        admin_id: &Uuid,
        score: f64,
        comments: Option<&str>,
    ) -> AppResult<SubmissionFeedback> {
        let feedback = sqlx::query_as::<_, SubmissionFeedback>(
            r#"
            INSERT INTO submission_feedback (submission_id, admin_id, admin_score, comments)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(submission_id)
        .bind(admin_id)
        .bind(score)
        .bind(comments)
        .fetch_one(pool)
        .await?;

        Ok(feedback)
    }

    /// Replace score/comments on an existing admin row
    pub async fn update_admin(
        pool: &PgPool,
        id: &Uuid,
        admin_id: &Uuid,
        score: f64,
        comments: Option<&str>,
    ) -> AppResult<SubmissionFeedback> {
        let feedback = sqlx::query_as::<_, SubmissionFeedback>(
            r#"
            UPDATE submission_feedback
            SET admin_id = $2, admin_score = $3, comments = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(admin_id)
        .bind(score)
        .bind(comments)
        .fetch_one(pool)
        .await?;

        Ok(feedback)
    }

    /// List all feedback rows for a submission
    pub async fn list_for_submission(
        pool: &PgPool,
        submission_id: &Uuid,
    ) -> AppResult<Vec<SubmissionFeedback>> {
        let feedback = sqlx::query_as::<_, SubmissionFeedback>(
            r#"SELECT * FROM submission_feedback WHERE submission_id = $1 ORDER BY created_at"#,
        )
        .bind(submission_id)
        .fetch_all(pool)
        .await?;

        Ok(feedback)
    }

    /// All non-null supervisor scores across a team's submissions
    pub async fn supervisor_scores_for_team(pool: &PgPool, team_id: &Uuid) -> AppResult<Vec<f64>> {
        let scores: Vec<f64> = sqlx::query_scalar(
            r#"
            SELECT f.supervisor_score FROM submission_feedback f
            JOIN submissions s ON s.id = f.submission_id
            WHERE s.team_id = $1 AND f.supervisor_score IS NOT NULL
            "#,
        )
        .bind(team_id)
        .fetch_all(pool)
        .await?;

        Ok(scores)
    }

    /// Most recently created non-null admin score across a team's submissions
    pub async fn latest_admin_score_for_team(
        pool: &PgPool,
        team_id: &Uuid,
    ) -> AppResult<Option<f64>> {
        let score: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT f.admin_score FROM submission_feedback f
            JOIN submissions s ON s.id = f.submission_id
            WHERE s.team_id = $1 AND f.admin_score IS NOT NULL
            ORDER BY f.created_at DESC
            LIMIT 1
            "#,
        )
        .bind(team_id)
        .fetch_optional(pool)
        .await?;

        Ok(score)
    }

    /// Review count and average score given by one supervisor
    pub async fn supervisor_stats(pool: &PgPool, supervisor_id: &Uuid) -> AppResult<(i64, f64)> {
        let row: (i64, Option<f64>) = sqlx::query_as(
            r#"
            SELECT COUNT(*), AVG(supervisor_score)
            FROM submission_feedback
            WHERE supervisor_id = $1 AND supervisor_score IS NOT NULL
            "#,
        )
        .bind(supervisor_id)
        .fetch_one(pool)
        .await?;

        Ok((row.0, row.1.unwrap_or(0.0)))
    }
}
