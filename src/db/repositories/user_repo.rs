//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new student user
    pub async fn create_student(pool: &PgPool, email: &str, name: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, role)
            VALUES ($1, $2, 'student')
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Create a new supervisor user
    pub async fn create_supervisor(
        pool: &PgPool,
        email: &str,
        name: &str,
        department: &str,
        staff_id: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, role, department, staff_id)
            VALUES ($1, $2, 'supervisor', $3, $4)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(department)
        .bind(staff_id)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Update mutable profile fields; the role column is never touched here
    pub async fn update_profile(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        student_id: Option<&str>,
        department: Option<&str>,
        batch: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                name = COALESCE($2, name),
                student_id = COALESCE($3, student_id),
                department = COALESCE($4, department),
                batch = COALESCE($5, batch),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(student_id)
        .bind(department)
        .bind(batch)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// List users with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        role: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE
                ($1::text IS NULL OR role = $1)
                AND ($2::text IS NULL OR name ILIKE $2 OR email ILIKE $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(role)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM users
            WHERE
                ($1::text IS NULL OR role = $1)
                AND ($2::text IS NULL OR name ILIKE $2 OR email ILIKE $2)
            "#,
        )
        .bind(role)
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((users, count))
    }

    /// Count users, optionally restricted to one role
    pub async fn count_by_role(pool: &PgPool, role: Option<&str>) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM users WHERE ($1::text IS NULL OR role = $1)"#,
        )
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
