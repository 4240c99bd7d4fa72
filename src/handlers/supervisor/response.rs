//! Supervisor response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::handlers::teams::response::MemberResponse;

/// A submission awaiting supervisor review
#[derive(Debug, Serialize)]
pub struct PendingSubmissionResponse {
    pub submission_id: Uuid,
    pub team_id: Uuid,
    pub stage: String,
    pub submitted_at: DateTime<Utc>,
}

/// Submission detail for review
#[derive(Debug, Serialize)]
pub struct SubmissionReviewResponse {
    pub submission_id: Uuid,
    pub team_name: String,
    pub stage: String,
    pub file_url: String,
    pub file_name: String,
    pub submitted_at: DateTime<Utc>,
    pub members: Vec<MemberResponse>,
}

/// Per-supervisor review statistics
#[derive(Debug, Serialize)]
pub struct SupervisorStatsResponse {
    pub supervisor_id: Uuid,
    pub total_submissions_reviewed: i64,
    pub average_score_given: f64,
}
