//! Project response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{LeaderboardEntry, Project};

/// Project response
///
/// The enrollment token is only populated for admin callers.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub branch: String,
    pub batch: String,
    pub deadline: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_token: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectResponse {
    /// Build a response, exposing the enrollment token only when asked
    pub fn from_project(project: Project, include_token: bool) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            branch: project.branch,
            batch: project.batch,
            deadline: project.deadline,
            enrollment_token: include_token.then_some(project.enrollment_token),
            is_active: project.is_active,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Paginated project list response
#[derive(Debug, Serialize)]
pub struct ProjectsListResponse {
    pub projects: Vec<ProjectResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Enrollment receipt
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub project_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}

/// Project leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub project_id: Uuid,
    pub total_teams: usize,
    pub entries: Vec<LeaderboardEntry>,
}
