//! Supervisor access request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::submission::ApprovalStatus;

/// Request for supervisor access, decided by an admin.
///
/// Approval creates the supervisor user; the requester's student identity
/// is never promoted in place.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SupervisorRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
    pub staff_id: String,
    pub status: String,
    pub approved_by: Option<Uuid>,
    pub requested_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl SupervisorRequest {
    /// Parse the stored status column
    pub fn status(&self) -> Option<ApprovalStatus> {
        ApprovalStatus::from_str(&self.status)
    }

    /// Check whether the request still awaits a decision
    pub fn is_pending(&self) -> bool {
        self.status() == Some(ApprovalStatus::Pending)
    }
}
