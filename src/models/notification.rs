//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted in-app notification
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification intent kinds emitted by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Otp,
    TeamInvitation,
    SubmissionForApproval,
    SupervisorFeedback,
    SupervisorRequestDecision,
}

impl NotificationKind {
    /// Get kind as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Otp => "otp",
            Self::TeamInvitation => "team_invitation",
            Self::SubmissionForApproval => "submission_for_approval",
            Self::SupervisorFeedback => "supervisor_feedback",
            Self::SupervisorRequestDecision => "supervisor_request_decision",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
