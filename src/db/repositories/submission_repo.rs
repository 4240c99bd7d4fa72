//! Submission repository

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Submission, SubmissionApproval},
};

/// Repository for submission and peer-approval database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission record.
    ///
    /// Prior records for the same (team, stage) are left untouched; history
    /// is additive.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        team_id: &Uuid,
        stage: &str,
        file_url: &str,
        file_name: &str,
        uploaded_by: &Uuid,
        team_approval_status: &str,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (team_id, stage, file_url, file_name, uploaded_by, team_approval_status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(team_id)
        .bind(stage)
        .bind(file_url)
        .bind(file_name)
        .bind(uploaded_by)
        .bind(team_approval_status)
        .fetch_one(&mut **tx)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Find submission by ID inside a transaction, locking the row
    pub async fn find_by_id_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: &Uuid,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(submission)
    }

    /// List all submissions for a team, newest first
    pub async fn list_by_team(pool: &PgPool, team_id: &Uuid) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE team_id = $1 ORDER BY submitted_at DESC"#,
        )
        .bind(team_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// Latest submission for a (team, stage) pair - the record that counts
    /// for scoring when the stage was re-uploaded
    pub async fn latest_for_stage(
        pool: &PgPool,
        team_id: &Uuid,
        stage: &str,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE team_id = $1 AND stage = $2
            ORDER BY submitted_at DESC
            LIMIT 1
            "#,
        )
        .bind(team_id)
        .bind(stage)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Earliest final-stage submission time for a team
    pub async fn earliest_final_submission_at(
        pool: &PgPool,
        team_id: &Uuid,
    ) -> AppResult<Option<chrono::DateTime<chrono::Utc>>> {
        let submitted_at = sqlx::query_scalar(
            r#"
            SELECT submitted_at FROM submissions
            WHERE team_id = $1 AND stage = 'final_submission'
            ORDER BY submitted_at ASC
            LIMIT 1
            "#,
        )
        .bind(team_id)
        .fetch_optional(pool)
        .await?;

        Ok(submitted_at)
    }

    /// Update the team approval status inside a transaction
    pub async fn set_team_approval_status(
        tx: &mut Transaction<'_, Postgres>,
        id: &Uuid,
        status: &str,
        approved: bool,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET
                team_approval_status = $2,
                approved_at = CASE WHEN $3 THEN NOW() ELSE approved_at END
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(approved)
        .fetch_one(&mut **tx)
        .await?;

        Ok(submission)
    }

    /// Create a pending approval row for one voter
    pub async fn create_approval(
        tx: &mut Transaction<'_, Postgres>,
        submission_id: &Uuid,
        member_id: &Uuid,
    ) -> AppResult<SubmissionApproval> {
        let approval = sqlx::query_as::<_, SubmissionApproval>(
            r#"
            INSERT INTO submission_approvals (submission_id, member_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(submission_id)
        .bind(member_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(approval)
    }

    /// Find the approval row for a voter inside a transaction
    pub async fn find_approval(
        tx: &mut Transaction<'_, Postgres>,
        submission_id: &Uuid,
        member_id: &Uuid,
    ) -> AppResult<Option<SubmissionApproval>> {
        let approval = sqlx::query_as::<_, SubmissionApproval>(
            r#"SELECT * FROM submission_approvals WHERE submission_id = $1 AND member_id = $2"#,
        )
        .bind(submission_id)
        .bind(member_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(approval)
    }

    /// List approval rows for a submission
    pub async fn list_approvals(
        pool: &PgPool,
        submission_id: &Uuid,
    ) -> AppResult<Vec<SubmissionApproval>> {
        let approvals = sqlx::query_as::<_, SubmissionApproval>(
            r#"SELECT * FROM submission_approvals WHERE submission_id = $1"#,
        )
        .bind(submission_id)
        .fetch_all(pool)
        .await?;

        Ok(approvals)
    }

    /// List vote statuses inside a transaction
    pub async fn approval_statuses(
        tx: &mut Transaction<'_, Postgres>,
        submission_id: &Uuid,
    ) -> AppResult<Vec<String>> {
        let statuses: Vec<String> = sqlx::query_scalar(
            r#"SELECT status FROM submission_approvals WHERE submission_id = $1"#,
        )
        .bind(submission_id)
        .fetch_all(&mut **tx)
        .await?;

        Ok(statuses)
    }

    /// Record one voter's response
    pub async fn set_approval_status(
        tx: &mut Transaction<'_, Postgres>,
        id: &Uuid,
        status: &str,
    ) -> AppResult<SubmissionApproval> {
        let approval = sqlx::query_as::<_, SubmissionApproval>(
            r#"
            UPDATE submission_approvals
            SET status = $2, responded_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&mut **tx)
        .await?;

        Ok(approval)
    }

    /// Team-approved submissions that have no supervisor feedback yet
    pub async fn list_awaiting_supervisor_review(pool: &PgPool) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT s.* FROM submissions s
            WHERE s.team_approval_status = 'approved'
              AND NOT EXISTS (
                  SELECT 1 FROM submission_feedback f
                  WHERE f.submission_id = s.id AND f.supervisor_score IS NOT NULL
              )
            ORDER BY s.submitted_at
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }
}
