//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Submission, SubmissionApproval, SubmissionFeedback};

/// Submission response
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub stage: String,
    pub file_url: String,
    pub file_name: String,
    pub uploaded_by: Uuid,
    pub team_approval_status: String,
    pub submitted_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            team_id: submission.team_id,
            stage: submission.stage,
            file_url: submission.file_url,
            file_name: submission.file_name,
            uploaded_by: submission.uploaded_by,
            team_approval_status: submission.team_approval_status,
            submitted_at: submission.submitted_at,
            approved_at: submission.approved_at,
        }
    }
}

/// Team submission history response
#[derive(Debug, Serialize)]
pub struct TeamSubmissionsResponse {
    pub team_id: Uuid,
    pub submissions: Vec<SubmissionResponse>,
}

/// One member's vote on a submission
#[derive(Debug, Serialize)]
pub struct ApprovalResponse {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub member_id: Uuid,
    pub status: String,
    pub responded_at: Option<DateTime<Utc>>,
}

impl From<SubmissionApproval> for ApprovalResponse {
    fn from(approval: SubmissionApproval) -> Self {
        Self {
            id: approval.id,
            submission_id: approval.submission_id,
            member_id: approval.member_id,
            status: approval.status,
            responded_at: approval.responded_at,
        }
    }
}

/// Feedback row response
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub scorer_role: &'static str,
    pub supervisor_score: Option<f64>,
    pub admin_score: Option<f64>,
    pub comments: Option<String>,
    pub resubmission_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SubmissionFeedback> for FeedbackResponse {
    fn from(feedback: SubmissionFeedback) -> Self {
        let scorer_role = if feedback.is_admin_row() {
            "admin"
        } else {
            "supervisor"
        };
        Self {
            id: feedback.id,
            submission_id: feedback.submission_id,
            scorer_role,
            supervisor_score: feedback.supervisor_score,
            admin_score: feedback.admin_score,
            comments: feedback.comments,
            resubmission_deadline: feedback.resubmission_deadline,
            created_at: feedback.created_at,
            updated_at: feedback.updated_at,
        }
    }
}

/// Feedback history for a submission
#[derive(Debug, Serialize)]
pub struct SubmissionFeedbackResponse {
    pub submission_id: Uuid,
    pub feedback: Vec<FeedbackResponse>,
}
