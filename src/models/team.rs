//! Team formation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::submission::ApprovalStatus;

/// Team database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub project_id: Uuid,
    pub leader_id: Uuid,
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Parse the stored status column
    pub fn status(&self) -> Option<TeamStatus> {
        TeamStatus::from_str(&self.status)
    }

    /// Check whether a pending team is ready to activate.
    ///
    /// Activation requires every invitation resolved to approved and a
    /// roster of at least two members. Rejected invitations stall
    /// activation; they never drive the team inactive on their own.
    pub fn activation_ready(invitation_statuses: &[ApprovalStatus], roster_size: usize) -> bool {
        roster_size >= 2
            && invitation_statuses
                .iter()
                .all(|s| *s == ApprovalStatus::Approved)
    }
}

/// Team lifecycle status
///
/// `Pending -> Active -> Locked`, with `Inactive` as a terminal state
/// reachable only from `Pending` when formation is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Pending,
    Active,
    Locked,
    Inactive,
}

impl TeamStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Locked => "locked",
            Self::Inactive => "inactive",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "locked" => Some(Self::Locked),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Check whether submissions may be uploaded in this status.
    ///
    /// Locking is the leader's declaration that the roster is final; by
    /// default uploads are open from activation onwards, with a policy
    /// switch to restrict uploads to locked teams.
    pub fn accepts_uploads(&self, require_locked: bool) -> bool {
        match self {
            Self::Locked => true,
            Self::Active => !require_locked,
            Self::Pending | Self::Inactive => false,
        }
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Team roster membership record
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub joined_at: DateTime<Utc>,
}

/// Team invitation - at most one pending per (team, invitee email)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeamInvitation {
    pub id: Uuid,
    pub team_id: Uuid,
    pub invitee_email: String,
    pub status: String,
    pub invited_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_requires_roster_of_two() {
        // Leader alone, no invitations sent yet
        assert!(!Team::activation_ready(&[], 1));
        // Invitations all approved but nobody actually joined
        assert!(!Team::activation_ready(&[ApprovalStatus::Approved], 1));
    }

    #[test]
    fn test_activation_when_all_approved() {
        let statuses = [ApprovalStatus::Approved];
        assert!(Team::activation_ready(&statuses, 2));
    }

    #[test]
    fn test_pending_or_rejected_invitation_stalls_activation() {
        assert!(!Team::activation_ready(
            &[ApprovalStatus::Approved, ApprovalStatus::Pending],
            2
        ));
        assert!(!Team::activation_ready(
            &[ApprovalStatus::Approved, ApprovalStatus::Rejected],
            2
        ));
    }

    #[test]
    fn test_activation_check_is_deterministic() {
        let statuses = [ApprovalStatus::Approved, ApprovalStatus::Approved];
        let first = Team::activation_ready(&statuses, 3);
        let second = Team::activation_ready(&statuses, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_upload_gate() {
        assert!(TeamStatus::Active.accepts_uploads(false));
        assert!(TeamStatus::Locked.accepts_uploads(false));
        assert!(!TeamStatus::Pending.accepts_uploads(false));

        // Restrictive policy: only locked teams may upload
        assert!(!TeamStatus::Active.accepts_uploads(true));
        assert!(TeamStatus::Locked.accepts_uploads(true));
    }
}
