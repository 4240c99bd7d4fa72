//! Project service

use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{ENROLLMENT_TOKEN_LENGTH, roles},
    db::repositories::{AdminRepository, ProjectRepository, TeamRepository},
    error::{AppError, AppResult},
    models::{Project, ProjectEnrollment},
    utils::{crypto, validation},
};

/// Project service for registry and enrollment logic
pub struct ProjectService;

impl ProjectService {
    /// Create a new project with a freshly generated enrollment token
    pub async fn create_project(
        pool: &PgPool,
        admin_id: &Uuid,
        requester_role: &str,
        title: &str,
        description: &str,
        branch: &str,
        batch: &str,
        deadline: DateTime<Utc>,
    ) -> AppResult<Project> {
        if requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Only admins can create projects".to_string(),
            ));
        }

        let title = validation::validate_project_title(title)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        let token = crypto::generate_secure_token(ENROLLMENT_TOKEN_LENGTH);

        let project =
            ProjectRepository::create(pool, &title, description, branch, batch, deadline, &token)
                .await?;

        AdminRepository::insert_log(
            pool,
            admin_id,
            "create_project",
            "project",
            Some(&project.id),
            Some(json!({ "title": project.title })),
        )
        .await?;

        Ok(project)
    }

    /// Get project by ID
    pub async fn get_project(pool: &PgPool, id: &Uuid) -> AppResult<Project> {
        ProjectRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// List projects with pagination
    pub async fn list_projects(
        pool: &PgPool,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Project>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        ProjectRepository::list(pool, offset, limit).await
    }

    /// Update project details. The enrollment token is never regenerated.
    pub async fn update_project(
        pool: &PgPool,
        admin_id: &Uuid,
        requester_role: &str,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        branch: Option<&str>,
        batch: Option<&str>,
        deadline: Option<DateTime<Utc>>,
    ) -> AppResult<Project> {
        if requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Only admins can update projects".to_string(),
            ));
        }

        Self::get_project(pool, id).await?;

        let project =
            ProjectRepository::update(pool, id, title, description, branch, batch, deadline)
                .await?;

        AdminRepository::insert_log(pool, admin_id, "update_project", "project", Some(id), None)
            .await?;

        Ok(project)
    }

    /// Delete a project
    pub async fn delete_project(
        pool: &PgPool,
        admin_id: &Uuid,
        requester_role: &str,
        id: &Uuid,
    ) -> AppResult<()> {
        if requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Only admins can delete projects".to_string(),
            ));
        }

        Self::get_project(pool, id).await?;
        ProjectRepository::delete(pool, id).await?;

        AdminRepository::insert_log(pool, admin_id, "delete_project", "project", Some(id), None)
            .await?;

        Ok(())
    }

    /// Enroll a student into a project using the enrollment token
    pub async fn enroll(
        pool: &PgPool,
        project_id: &Uuid,
        user_id: &Uuid,
        requester_role: &str,
        token: &str,
    ) -> AppResult<ProjectEnrollment> {
        if requester_role != roles::STUDENT {
            return Err(AppError::Forbidden(
                "Only students can enroll in projects".to_string(),
            ));
        }

        let project = Self::get_project(pool, project_id).await?;

        if project.enrollment_token != token {
            return Err(AppError::InvalidArgument(
                "Invalid enrollment token".to_string(),
            ));
        }

        if ProjectRepository::find_enrollment(pool, project_id, user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Already enrolled in this project".to_string(),
            ));
        }

        ProjectRepository::enroll(pool, project_id, user_id).await
    }

    /// List teams for a project
    pub async fn list_teams(pool: &PgPool, project_id: &Uuid) -> AppResult<Vec<crate::models::Team>> {
        Self::get_project(pool, project_id).await?;
        TeamRepository::list_by_project(pool, project_id).await
    }
}
