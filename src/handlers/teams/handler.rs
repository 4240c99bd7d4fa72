//! Team handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::TeamService,
    state::AppState,
};

use super::{
    request::{CreateTeamRequest, InviteMemberRequest, RespondInvitationRequest},
    response::{InvitationResponse, MemberResponse, TeamDetailResponse, TeamResponse},
};

/// Create a team with the caller as leader
pub async fn create_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<TeamResponse>)> {
    payload.validate()?;

    let team = TeamService::create_team(
        state.db(),
        &payload.project_id,
        &auth_user.id,
        &payload.name,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(team.into())))
}

/// Get team detail with roster and invitations
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TeamDetailResponse>> {
    let team = TeamService::get_team(state.db(), &id).await?;
    let members = TeamService::get_members(state.db(), &id).await?;
    let invitations = TeamService::get_invitations(state.db(), &id).await?;

    Ok(Json(TeamDetailResponse {
        team: team.into(),
        members: members
            .into_iter()
            .map(|m| MemberResponse {
                id: m.id,
                name: m.name,
                email: m.email,
                role: m.role,
            })
            .collect(),
        invitations: invitations.into_iter().map(Into::into).collect(),
    }))
}

/// Get team roster
pub async fn get_members(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<MemberResponse>>> {
    let members = TeamService::get_members(state.db(), &id).await?;

    Ok(Json(
        members
            .into_iter()
            .map(|m| MemberResponse {
                id: m.id,
                name: m.name,
                email: m.email,
                role: m.role,
            })
            .collect(),
    ))
}

/// Leader invites a member by email
pub async fn invite_member(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<InviteMemberRequest>,
) -> AppResult<(StatusCode, Json<InvitationResponse>)> {
    payload.validate()?;

    let mailer = state.mailer().zip(state.config().smtp.as_ref());
    let invitation = TeamService::invite(
        state.db(),
        mailer,
        &id,
        &auth_user.id,
        &payload.invitee_email,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(invitation.into())))
}

/// Invitee responds to an invitation; returns the re-evaluated team
pub async fn respond_to_invitation(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(invitation_id): Path<Uuid>,
    Json(payload): Json<RespondInvitationRequest>,
) -> AppResult<Json<TeamResponse>> {
    let team = TeamService::respond_to_invitation(
        state.db(),
        &invitation_id,
        &auth_user.id,
        payload.accept,
    )
    .await?;

    Ok(Json(team.into()))
}

/// Leader locks the team roster; irreversible
pub async fn lock_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TeamResponse>> {
    let team = TeamService::lock(state.db(), &id, &auth_user.id).await?;

    Ok(Json(team.into()))
}
