//! Team formation service
//!
//! Teams move `PENDING -> ACTIVE -> LOCKED`. Activation is re-evaluated
//! after every invitation response inside a transaction that locks the
//! team row, so concurrent responses cannot both observe a stale roster
//! and miss the transition.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::SmtpConfig,
    db::repositories::{ProjectRepository, TeamRepository, UserRepository},
    error::{AppError, AppResult},
    models::{ApprovalStatus, NotificationKind, Team, TeamInvitation, TeamStatus, User},
    services::NotificationService,
    state::Mailer,
    utils::validation,
};

/// Team formation service
pub struct TeamService;

impl TeamService {
    /// Create a team for a project with the caller as leader.
    ///
    /// Fails when the leader already leads or belongs to a team in the
    /// same project; a person holds at most one membership per project.
    pub async fn create_team(
        pool: &PgPool,
        project_id: &Uuid,
        leader_id: &Uuid,
        name: &str,
    ) -> AppResult<Team> {
        let name = validation::validate_team_name(name)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        if ProjectRepository::find_by_id(pool, project_id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        if TeamRepository::find_by_project_and_member(pool, project_id, leader_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Already a member of a team in this project".to_string(),
            ));
        }

        TeamRepository::create(pool, project_id, leader_id, &name).await
    }

    /// Get team by ID
    pub async fn get_team(pool: &PgPool, id: &Uuid) -> AppResult<Team> {
        TeamRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// Get team roster
    pub async fn get_members(pool: &PgPool, team_id: &Uuid) -> AppResult<Vec<User>> {
        Self::get_team(pool, team_id).await?;
        TeamRepository::list_members(pool, team_id).await
    }

    /// List invitations for a team
    pub async fn get_invitations(pool: &PgPool, team_id: &Uuid) -> AppResult<Vec<TeamInvitation>> {
        Self::get_team(pool, team_id).await?;
        TeamRepository::list_invitations(pool, team_id).await
    }

    /// Leader invites a member by email.
    ///
    /// At most one pending invitation may exist per (team, email).
    pub async fn invite(
        pool: &PgPool,
        mailer: Option<(&Mailer, &SmtpConfig)>,
        team_id: &Uuid,
        caller_id: &Uuid,
        invitee_email: &str,
    ) -> AppResult<TeamInvitation> {
        validation::validate_email(invitee_email)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        let team = Self::get_team(pool, team_id).await?;

        if team.leader_id != *caller_id {
            return Err(AppError::Forbidden(
                "Only the team leader can invite members".to_string(),
            ));
        }

        if TeamRepository::find_pending_invitation(pool, team_id, invitee_email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Invitation already sent".to_string()));
        }

        let invitation = TeamRepository::create_invitation(pool, team_id, invitee_email).await?;

        // Intent only; delivery failure never unwinds the invitation
        let title = format!("Invitation to join team {}", team.name);
        let body = format!(
            "You have been invited to join team {}. Log in to respond to the invitation.",
            team.name
        );
        match UserRepository::find_by_email(pool, invitee_email).await {
            Ok(Some(invitee)) => {
                NotificationService::notify(
                    pool,
                    mailer,
                    &invitee.id,
                    NotificationKind::TeamInvitation,
                    &title,
                    &body,
                )
                .await
            }
            _ => {
                NotificationService::notify_email(
                    mailer,
                    NotificationKind::TeamInvitation,
                    invitee_email,
                    &title,
                    &body,
                )
                .await
            }
        }

        Ok(invitation)
    }

    /// Invitee accepts or rejects an invitation.
    ///
    /// Accepting is idempotent: an already-joined member re-accepting is a
    /// no-op. After every response the team is re-evaluated and activates
    /// once all invitations are approved and the roster has at least two
    /// members. Rejections stall activation but never deactivate the team.
    pub async fn respond_to_invitation(
        pool: &PgPool,
        invitation_id: &Uuid,
        responder_id: &Uuid,
        accept: bool,
    ) -> AppResult<Team> {
        let responder = UserRepository::find_by_id(pool, responder_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut tx = pool.begin().await?;

        let invitation = TeamRepository::find_invitation(&mut tx, invitation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))?;

        // The invitation is addressed to an email; only that person responds
        if !invitation.invitee_email.eq_ignore_ascii_case(&responder.email) {
            return Err(AppError::NotFound("Invitation not found".to_string()));
        }

        // Serialize concurrent responses per team
        let team = TeamRepository::find_by_id_for_update(&mut tx, &invitation.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        let status = if accept {
            TeamRepository::add_member(&mut tx, &team.id, responder_id).await?;
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Rejected
        };

        TeamRepository::set_invitation_status(&mut tx, invitation_id, status.as_str()).await?;

        // Re-evaluate activation with the fresh invitation + roster state
        let statuses: Vec<ApprovalStatus> = TeamRepository::invitation_statuses(&mut tx, &team.id)
            .await?
            .iter()
            .filter_map(|s| ApprovalStatus::from_str(s))
            .collect();
        let roster_size = TeamRepository::member_count(&mut tx, &team.id).await? as usize;

        let team = if team.status() == Some(TeamStatus::Pending)
            && Team::activation_ready(&statuses, roster_size)
        {
            TeamRepository::set_status_tx(&mut tx, &team.id, TeamStatus::Active.as_str()).await?
        } else {
            team
        };

        tx.commit().await?;

        Ok(team)
    }

    /// Leader locks the team, declaring the roster final. Irreversible.
    pub async fn lock(pool: &PgPool, team_id: &Uuid, caller_id: &Uuid) -> AppResult<Team> {
        let team = Self::get_team(pool, team_id).await?;

        if team.leader_id != *caller_id {
            return Err(AppError::Forbidden(
                "Only the team leader can lock the team".to_string(),
            ));
        }

        if team.status() != Some(TeamStatus::Active) {
            return Err(AppError::InvalidState(
                "Team must be active to lock".to_string(),
            ));
        }

        TeamRepository::set_status(pool, team_id, TeamStatus::Locked.as_str()).await
    }
}
