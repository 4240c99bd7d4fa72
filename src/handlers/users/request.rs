//! User request DTOs

use serde::Deserialize;
use validator::Validate;

/// Profile update request; role is never updatable here
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub student_id: Option<String>,

    #[validate(length(min = 1, max = 128))]
    pub department: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub batch: Option<String>,
}

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub role: Option<String>,
    pub search: Option<String>,
}
