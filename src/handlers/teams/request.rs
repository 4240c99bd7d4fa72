//! Team request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create team request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    pub project_id: Uuid,

    #[validate(length(min = 1, max = 128))]
    pub name: String,
}

/// Invite member request
#[derive(Debug, Deserialize, Validate)]
pub struct InviteMemberRequest {
    #[validate(email)]
    pub invitee_email: String,
}

/// Invitation response request
#[derive(Debug, Deserialize)]
pub struct RespondInvitationRequest {
    pub accept: bool,
}
