//! Admin repository - supervisor requests and audit logs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{AdminLog, SupervisorRequest},
};

/// Repository for supervisor requests and the admin audit log
pub struct AdminRepository;

impl AdminRepository {
    /// Create a supervisor access request
    pub async fn create_request(
        pool: &PgPool,
        name: &str,
        email: &str,
        department: &str,
        staff_id: &str,
    ) -> AppResult<SupervisorRequest> {
        let request = sqlx::query_as::<_, SupervisorRequest>(
            r#"
            INSERT INTO supervisor_requests (name, email, department, staff_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(department)
        .bind(staff_id)
        .fetch_one(pool)
        .await?;

        Ok(request)
    }

    /// Find a supervisor request by ID
    pub async fn find_request(pool: &PgPool, id: &Uuid) -> AppResult<Option<SupervisorRequest>> {
        let request = sqlx::query_as::<_, SupervisorRequest>(
            r#"SELECT * FROM supervisor_requests WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(request)
    }

    /// List requests awaiting a decision
    pub async fn list_pending_requests(pool: &PgPool) -> AppResult<Vec<SupervisorRequest>> {
        let requests = sqlx::query_as::<_, SupervisorRequest>(
            r#"SELECT * FROM supervisor_requests WHERE status = 'pending' ORDER BY requested_at"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(requests)
    }

    /// Record the decision on a supervisor request
    pub async fn decide_request(
        pool: &PgPool,
        id: &Uuid,
        status: &str,
        decided_by: &Uuid,
    ) -> AppResult<SupervisorRequest> {
        let request = sqlx::query_as::<_, SupervisorRequest>(
            r#"
            UPDATE supervisor_requests
            SET status = $2, approved_by = $3, decided_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(decided_by)
        .fetch_one(pool)
        .await?;

        Ok(request)
    }

    /// Append an audit log entry
    pub async fn insert_log(
        pool: &PgPool,
        admin_id: &Uuid,
        action: &str,
        resource_type: &str,
        resource_id: Option<&Uuid>,
        details: Option<serde_json::Value>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_logs (admin_id, action, resource_type, resource_id, details)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(admin_id)
        .bind(action)
        .bind(resource_type)
        .bind(resource_id)
        .bind(details)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List audit log entries, newest first
    pub async fn list_logs(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<AdminLog>> {
        let logs = sqlx::query_as::<_, AdminLog>(
            r#"SELECT * FROM admin_logs ORDER BY created_at DESC OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(logs)
    }

    /// Count pending supervisor requests
    pub async fn count_pending_requests(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM supervisor_requests WHERE status = 'pending'"#,
        )
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
