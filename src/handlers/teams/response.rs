//! Team response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Team, TeamInvitation};

/// Team response
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub leader_id: Uuid,
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            project_id: team.project_id,
            leader_id: team.leader_id,
            name: team.name,
            status: team.status,
            created_at: team.created_at,
        }
    }
}

/// Roster member summary
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Invitation response DTO
#[derive(Debug, Serialize)]
pub struct InvitationResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub invitee_email: String,
    pub status: String,
    pub invited_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl From<TeamInvitation> for InvitationResponse {
    fn from(invitation: TeamInvitation) -> Self {
        Self {
            id: invitation.id,
            team_id: invitation.team_id,
            invitee_email: invitation.invitee_email,
            status: invitation.status,
            invited_at: invitation.invited_at,
            responded_at: invitation.responded_at,
        }
    }
}

/// Team detail with roster and invitations
#[derive(Debug, Serialize)]
pub struct TeamDetailResponse {
    pub team: TeamResponse,
    pub members: Vec<MemberResponse>,
    pub invitations: Vec<InvitationResponse>,
}
