//! Project repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Project, ProjectEnrollment},
};

/// Repository for project and enrollment database operations
pub struct ProjectRepository;

impl ProjectRepository {
    /// Create a new project
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
        branch: &str,
        batch: &str,
        deadline: DateTime<Utc>,
        enrollment_token: &str,
    ) -> AppResult<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, branch, batch, deadline, enrollment_token)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(branch)
        .bind(batch)
        .bind(deadline)
        .bind(enrollment_token)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Find project by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(r#"SELECT * FROM projects WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(project)
    }

    /// List projects, newest first
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<(Vec<Project>, i64)> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM projects"#)
            .fetch_one(pool)
            .await?;

        Ok((projects, count))
    }

    /// Update project details; the enrollment token is immutable
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        branch: Option<&str>,
        batch: Option<&str>,
        deadline: Option<DateTime<Utc>>,
    ) -> AppResult<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                branch = COALESCE($4, branch),
                batch = COALESCE($5, batch),
                deadline = COALESCE($6, deadline),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(branch)
        .bind(batch)
        .bind(deadline)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Delete a project
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM projects WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Create an enrollment record
    pub async fn enroll(
        pool: &PgPool,
        project_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<ProjectEnrollment> {
        let enrollment = sqlx::query_as::<_, ProjectEnrollment>(
            r#"
            INSERT INTO project_enrollments (project_id, user_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(enrollment)
    }

    /// Find an enrollment for a (project, user) pair
    pub async fn find_enrollment(
        pool: &PgPool,
        project_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<ProjectEnrollment>> {
        let enrollment = sqlx::query_as::<_, ProjectEnrollment>(
            r#"SELECT * FROM project_enrollments WHERE project_id = $1 AND user_id = $2"#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(enrollment)
    }

    /// Count enrollments for a project
    pub async fn enrollment_count(pool: &PgPool, project_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM project_enrollments WHERE project_id = $1"#,
        )
        .bind(project_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
