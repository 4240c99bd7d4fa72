//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
};

/// User service for profile and directory operations
pub struct UserService;

impl UserService {
    /// Get a user by ID
    pub async fn get_user(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Update the caller's own profile. The role is immutable here;
    /// promotion happens only through an approved supervisor request.
    pub async fn update_profile(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        student_id: Option<&str>,
        department: Option<&str>,
        batch: Option<&str>,
    ) -> AppResult<User> {
        // Ensure the user exists before updating
        Self::get_user(pool, id).await?;

        UserRepository::update_profile(pool, id, name, student_id, department, batch).await
    }

    /// List users (admin directory view)
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        role: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        UserRepository::list(pool, offset, limit, role, search).await
    }
}
