//! Project handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{LeaderboardService, ProjectService},
    state::AppState,
};

use super::{
    request::{CreateProjectRequest, EnrollRequest, ListProjectsQuery, UpdateProjectRequest},
    response::{EnrollmentResponse, LeaderboardResponse, ProjectResponse, ProjectsListResponse},
};

use crate::handlers::teams::response::TeamResponse;

/// Create a project (admin)
pub async fn create_project(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    payload.validate()?;

    let project = ProjectService::create_project(
        state.db(),
        &auth_user.id,
        &auth_user.role,
        &payload.title,
        &payload.description,
        &payload.branch,
        &payload.batch,
        payload.deadline,
    )
    .await?;

    // Creator gets the enrollment token back for distribution
    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse::from_project(project, true)),
    ))
}

/// List projects
pub async fn list_projects(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListProjectsQuery>,
) -> AppResult<Json<ProjectsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (projects, total) = ProjectService::list_projects(state.db(), page, per_page).await?;

    let include_token = auth_user.is_admin();
    Ok(Json(ProjectsListResponse {
        projects: projects
            .into_iter()
            .map(|p| ProjectResponse::from_project(p, include_token))
            .collect(),
        total,
        page,
        per_page,
    }))
}

/// Get project details
pub async fn get_project(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ProjectService::get_project(state.db(), &id).await?;

    Ok(Json(ProjectResponse::from_project(
        project,
        auth_user.is_admin(),
    )))
}

/// Update a project (admin)
pub async fn update_project(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProjectRequest>,
) -> AppResult<Json<ProjectResponse>> {
    payload.validate()?;

    let project = ProjectService::update_project(
        state.db(),
        &auth_user.id,
        &auth_user.role,
        &id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.branch.as_deref(),
        payload.batch.as_deref(),
        payload.deadline,
    )
    .await?;

    Ok(Json(ProjectResponse::from_project(project, true)))
}

/// Delete a project (admin)
pub async fn delete_project(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ProjectService::delete_project(state.db(), &auth_user.id, &auth_user.role, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Enroll in a project using the enrollment token
pub async fn enroll(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EnrollRequest>,
) -> AppResult<(StatusCode, Json<EnrollmentResponse>)> {
    payload.validate()?;

    let enrollment = ProjectService::enroll(
        state.db(),
        &id,
        &auth_user.id,
        &auth_user.role,
        &payload.token,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(EnrollmentResponse {
            project_id: enrollment.project_id,
            enrolled_at: enrollment.enrolled_at,
        }),
    ))
}

/// List teams in a project
pub async fn list_teams(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<TeamResponse>>> {
    let teams = ProjectService::list_teams(state.db(), &id).await?;

    Ok(Json(teams.into_iter().map(Into::into).collect()))
}

/// Compute the project leaderboard
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LeaderboardResponse>> {
    let entries = LeaderboardService::compute_leaderboard(state.db(), &id).await?;

    Ok(Json(LeaderboardResponse {
        project_id: id,
        total_teams: entries.len(),
        entries,
    }))
}
