//! Submission handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{
        AdminFeedbackRequest, RecordApprovalRequest, SupervisorFeedbackRequest,
        UploadSubmissionRequest,
    },
    response::{
        ApprovalResponse, FeedbackResponse, SubmissionFeedbackResponse, SubmissionResponse,
        TeamSubmissionsResponse,
    },
};

/// Leader uploads a staged submission
pub async fn upload_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((team_id, stage)): Path<(Uuid, String)>,
    Json(payload): Json<UploadSubmissionRequest>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    payload.validate()?;

    let mailer = state.mailer().zip(state.config().smtp.as_ref());
    let submission = SubmissionService::upload(
        state.db(),
        mailer,
        &team_id,
        &stage,
        &auth_user.id,
        &payload.file_url,
        &payload.file_name,
        state.config().workflow.upload_requires_locked_team,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(submission.into())))
}

/// Get submission details
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::get_submission(state.db(), &id).await?;

    Ok(Json(submission.into()))
}

/// Get a team's submission history
pub async fn get_team_submissions(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> AppResult<Json<TeamSubmissionsResponse>> {
    let submissions = SubmissionService::list_team_submissions(state.db(), &team_id).await?;

    Ok(Json(TeamSubmissionsResponse {
        team_id,
        submissions: submissions.into_iter().map(Into::into).collect(),
    }))
}

/// List peer-approval rows for a submission
pub async fn list_approvals(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ApprovalResponse>>> {
    let approvals = SubmissionService::list_approvals(state.db(), &id).await?;

    Ok(Json(approvals.into_iter().map(Into::into).collect()))
}

/// Member records their approval vote
pub async fn record_approval(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecordApprovalRequest>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission =
        SubmissionService::record_approval(state.db(), &id, &auth_user.id, payload.approve)
            .await?;

    Ok(Json(submission.into()))
}

/// Supervisor records or revises feedback (score 0-10)
pub async fn record_supervisor_feedback(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SupervisorFeedbackRequest>,
) -> AppResult<Json<FeedbackResponse>> {
    payload.validate()?;

    if !auth_user.is_supervisor() && !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only supervisors can record supervisor feedback".to_string(),
        ));
    }

    let mailer = state.mailer().zip(state.config().smtp.as_ref());
    let feedback = SubmissionService::record_supervisor_feedback(
        state.db(),
        mailer,
        &id,
        &auth_user.id,
        payload.score,
        payload.comments.as_deref(),
        payload.resubmission_deadline,
    )
    .await?;

    Ok(Json(feedback.into()))
}

/// Admin records or revises the admin score (0-20)
pub async fn record_admin_feedback(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AdminFeedbackRequest>,
) -> AppResult<Json<FeedbackResponse>> {
    payload.validate()?;

    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can record admin feedback".to_string(),
        ));
    }

    let feedback = SubmissionService::record_admin_feedback(
        state.db(),
        &id,
        &auth_user.id,
        payload.score,
        payload.comments.as_deref(),
    )
    .await?;

    Ok(Json(feedback.into()))
}

/// Get the feedback history for a submission
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionFeedbackResponse>> {
    let feedback = SubmissionService::list_feedback(state.db(), &id).await?;

    Ok(Json(SubmissionFeedbackResponse {
        submission_id: id,
        feedback: feedback.into_iter().map(Into::into).collect(),
    }))
}
