//! Submission request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Upload submission request: an opaque document reference
#[derive(Debug, Deserialize, Validate)]
pub struct UploadSubmissionRequest {
    #[validate(length(min = 1, max = 2048))]
    pub file_url: String,

    #[validate(length(min = 1, max = 256))]
    pub file_name: String,
}

/// Peer approval vote request
#[derive(Debug, Deserialize)]
pub struct RecordApprovalRequest {
    pub approve: bool,
}

/// Supervisor feedback request (score 0-10)
#[derive(Debug, Deserialize, Validate)]
pub struct SupervisorFeedbackRequest {
    #[validate(range(min = 0.0, max = 10.0))]
    pub score: f64,

    #[validate(length(max = 8192))]
    pub comments: Option<String>,

    pub resubmission_deadline: Option<DateTime<Utc>>,
}

/// Admin feedback request (score 0-20)
#[derive(Debug, Deserialize, Validate)]
pub struct AdminFeedbackRequest {
    #[validate(range(min = 0.0, max = 20.0))]
    pub score: f64,

    #[validate(length(max = 8192))]
    pub comments: Option<String>,
}
