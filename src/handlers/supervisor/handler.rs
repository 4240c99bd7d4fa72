//! Supervisor handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    handlers::teams::response::MemberResponse,
    middleware::auth::AuthenticatedUser,
    services::{SubmissionService, TeamService},
    state::AppState,
};

use super::response::{
    PendingSubmissionResponse, SubmissionReviewResponse, SupervisorStatsResponse,
};

fn require_reviewer(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.is_supervisor() || auth_user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Supervisor access required".to_string(),
        ))
    }
}

/// Team-approved submissions awaiting supervisor review
pub async fn list_pending_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<PendingSubmissionResponse>>> {
    require_reviewer(&auth_user)?;

    let submissions = SubmissionService::list_awaiting_supervisor_review(state.db()).await?;

    Ok(Json(
        submissions
            .into_iter()
            .map(|s| PendingSubmissionResponse {
                submission_id: s.id,
                team_id: s.team_id,
                stage: s.stage,
                submitted_at: s.submitted_at,
            })
            .collect(),
    ))
}

/// Submission detail with roster, for review
pub async fn get_submission_detail(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionReviewResponse>> {
    require_reviewer(&auth_user)?;

    let submission = SubmissionService::get_submission(state.db(), &id).await?;
    let team = TeamService::get_team(state.db(), &submission.team_id).await?;
    let members = TeamService::get_members(state.db(), &submission.team_id).await?;

    Ok(Json(SubmissionReviewResponse {
        submission_id: submission.id,
        team_name: team.name,
        stage: submission.stage,
        file_url: submission.file_url,
        file_name: submission.file_name,
        submitted_at: submission.submitted_at,
        members: members
            .into_iter()
            .map(|m| MemberResponse {
                id: m.id,
                name: m.name,
                email: m.email,
                role: m.role,
            })
            .collect(),
    }))
}

/// Review statistics for the calling supervisor
pub async fn get_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<SupervisorStatsResponse>> {
    require_reviewer(&auth_user)?;

    let (count, avg) = SubmissionService::supervisor_stats(state.db(), &auth_user.id).await?;

    Ok(Json(SupervisorStatsResponse {
        supervisor_id: auth_user.id,
        total_submissions_reviewed: count,
        average_score_given: (avg * 100.0).round() / 100.0,
    }))
}
