//! Project request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Create project request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(length(min = 1, max = 65535))]
    pub description: String,

    #[validate(length(min = 1, max = 64))]
    pub branch: String,

    #[validate(length(min = 1, max = 32))]
    pub batch: String,

    pub deadline: DateTime<Utc>,
}

/// Update project request; the enrollment token cannot be changed
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 65535))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub branch: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub batch: Option<String>,

    pub deadline: Option<DateTime<Utc>>,
}

/// Token-gated enrollment request
#[derive(Debug, Deserialize, Validate)]
pub struct EnrollRequest {
    #[validate(length(min = 1, max = 64))]
    pub token: String,
}

/// List projects query parameters
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
