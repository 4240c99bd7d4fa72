//! Submission and peer-approval models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
///
/// History is additive: re-uploading a stage creates a new record and the
/// latest submitted record for a (team, stage) pair is authoritative for
/// scoring. `team_approval_status` tracks the peer quorum; supervisor and
/// admin review live in separate feedback rows and never block each other.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
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

impl Submission {
    /// Parse the stored team approval status
    pub fn team_approval_status(&self) -> Option<ApprovalStatus> {
        ApprovalStatus::from_str(&self.team_approval_status)
    }
}

/// Submission stage enum, strictly ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStage {
    Synopsis,
    Progress1,
    Progress2,
    FinalSubmission,
}

impl SubmissionStage {
    /// All stages in checkpoint order
    pub const ALL: [SubmissionStage; 4] = [
        Self::Synopsis,
        Self::Progress1,
        Self::Progress2,
        Self::FinalSubmission,
    ];

    /// Get stage as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synopsis => "synopsis",
            Self::Progress1 => "progress_1",
            Self::Progress2 => "progress_2",
            Self::FinalSubmission => "final_submission",
        }
    }

    /// Parse stage from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "synopsis" => Some(Self::Synopsis),
            "progress_1" => Some(Self::Progress1),
            "progress_2" => Some(Self::Progress2),
            "final_submission" => Some(Self::FinalSubmission),
            _ => None,
        }
    }

    /// Zero-based position in the checkpoint order
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

impl std::fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Approval status shared by invitations, peer votes, and access requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One member's vote on a submission
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubmissionApproval {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub member_id: Uuid,
    pub status: String,
    pub responded_at: Option<DateTime<Utc>>,
}

/// Evaluate the peer-approval quorum over the recorded votes.
///
/// The quorum is unanimous: the submission is approved only when every
/// vote is approved. A rejected vote withholds the quorum without flipping
/// the submission to rejected; the leader resolves it by re-uploading. An
/// empty vote set (roster with no non-leader members) approves vacuously.
pub fn evaluate_quorum(votes: &[ApprovalStatus]) -> ApprovalStatus {
    if votes.iter().all(|v| *v == ApprovalStatus::Approved) {
        ApprovalStatus::Approved
    } else {
        ApprovalStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_round_trip() {
        for stage in SubmissionStage::ALL {
            assert_eq!(SubmissionStage::from_str(stage.as_str()), Some(stage));
        }
        assert_eq!(SubmissionStage::from_str("midterm"), None);
    }

    #[test]
    fn test_stage_ordering() {
        assert!(SubmissionStage::Synopsis < SubmissionStage::Progress1);
        assert!(SubmissionStage::Progress2 < SubmissionStage::FinalSubmission);
        assert_eq!(SubmissionStage::Synopsis.position(), 0);
        assert_eq!(SubmissionStage::FinalSubmission.position(), 3);
    }

    #[test]
    fn test_quorum_requires_every_vote() {
        // 3-member team: leader uploads, two approval rows created pending
        let mut votes = vec![ApprovalStatus::Pending, ApprovalStatus::Pending];
        assert_eq!(evaluate_quorum(&votes), ApprovalStatus::Pending);

        // First member approves, still short of quorum
        votes[0] = ApprovalStatus::Approved;
        assert_eq!(evaluate_quorum(&votes), ApprovalStatus::Pending);

        // Second member approves, quorum reached
        votes[1] = ApprovalStatus::Approved;
        assert_eq!(evaluate_quorum(&votes), ApprovalStatus::Approved);
    }

    #[test]
    fn test_rejection_withholds_quorum_without_rejecting() {
        let votes = [ApprovalStatus::Approved, ApprovalStatus::Rejected];
        assert_eq!(evaluate_quorum(&votes), ApprovalStatus::Pending);
    }

    #[test]
    fn test_empty_vote_set_approves_vacuously() {
        assert_eq!(evaluate_quorum(&[]), ApprovalStatus::Approved);
    }

    #[test]
    fn test_quorum_is_deterministic() {
        let votes = [ApprovalStatus::Approved, ApprovalStatus::Approved];
        assert_eq!(evaluate_quorum(&votes), evaluate_quorum(&votes));
    }
}
