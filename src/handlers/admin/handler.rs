//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::{AdminService, admin_service::AdminStats},
    state::AppState,
};

use super::response::{AdminLogResponse, RequestDecisionResponse, SupervisorRequestDetail};

/// Pagination query for the audit log
#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

fn require_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Admin access required".to_string()))
    }
}

/// List pending supervisor requests
pub async fn list_supervisor_requests(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<SupervisorRequestDetail>>> {
    require_admin(&auth_user)?;

    let requests = AdminService::list_pending_requests(state.db()).await?;

    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

/// Approve a supervisor request, creating the supervisor identity
pub async fn approve_supervisor_request(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RequestDecisionResponse>> {
    require_admin(&auth_user)?;

    let mailer = state.mailer().zip(state.config().smtp.as_ref());
    let supervisor =
        AdminService::approve_request(state.db(), mailer, &id, &auth_user.id).await?;

    Ok(Json(RequestDecisionResponse {
        request_id: id,
        status: "approved".to_string(),
        supervisor_id: Some(supervisor.id),
    }))
}

/// Reject a supervisor request
pub async fn reject_supervisor_request(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RequestDecisionResponse>> {
    require_admin(&auth_user)?;

    let mailer = state.mailer().zip(state.config().smtp.as_ref());
    AdminService::reject_request(state.db(), mailer, &id, &auth_user.id).await?;

    Ok(Json(RequestDecisionResponse {
        request_id: id,
        status: "rejected".to_string(),
        supervisor_id: None,
    }))
}

/// Audit log, newest first
pub async fn list_logs(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<LogsQuery>,
) -> AppResult<Json<Vec<AdminLogResponse>>> {
    require_admin(&auth_user)?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let logs = AdminService::list_logs(state.db(), page, per_page).await?;

    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

/// Dashboard statistics
pub async fn get_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<AdminStats>> {
    require_admin(&auth_user)?;

    let stats = AdminService::stats(state.db()).await?;

    Ok(Json(stats))
}
