//! Submission feedback model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review feedback on a submission.
///
/// Supervisor rows and admin rows are distinct records distinguished by
/// which scorer id is populated; within a role the row is upserted, so at
/// most one live supervisor row and one live admin row exist per
/// submission.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubmissionFeedback {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub supervisor_id: Option<Uuid>,
    pub admin_id: Option<Uuid>,
    pub supervisor_score: Option<f64>,
    pub admin_score: Option<f64>,
    pub comments: Option<String>,
    pub resubmission_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubmissionFeedback {
    /// Check if this is the supervisor-review row
    pub fn is_supervisor_row(&self) -> bool {
        self.supervisor_score.is_some() || self.supervisor_id.is_some()
    }

    /// Check if this is the admin-review row
    pub fn is_admin_row(&self) -> bool {
        self.admin_score.is_some() || self.admin_id.is_some()
    }
}
