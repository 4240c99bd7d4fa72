//! In-app notification handlers

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::Notification,
    services::NotificationService,
    state::AppState,
};

/// Pagination query for the notification feed
#[derive(Debug, Deserialize)]
pub struct NotificationsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Notification routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/{id}/read", post(mark_read))
}

/// List the caller's notifications, newest first
pub async fn list_notifications(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<NotificationsQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
    let offset = ((page - 1) * per_page) as i64;

    let notifications =
        NotificationService::list(state.db(), &auth_user.id, offset, per_page as i64).await?;

    Ok(Json(notifications))
}

/// Mark one of the caller's notifications as read
pub async fn mark_read(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Notification>> {
    let notification = NotificationService::mark_read(state.db(), &id, &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    Ok(Json(notification))
}
