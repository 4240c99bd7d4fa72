//! Project model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Project database model
///
/// The enrollment token is generated at creation and never rotated for the
/// lifetime of the project.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub branch: String,
    pub batch: String,
    pub deadline: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub enrollment_token: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Enrollment record - one per (project, student), never mutated
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProjectEnrollment {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}
