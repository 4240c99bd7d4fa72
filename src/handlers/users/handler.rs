//! User handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
};

use super::{
    request::{ListUsersQuery, UpdateProfileRequest},
    response::{UserResponse, UsersListResponse},
};

/// Get the caller's own profile
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::get_user(state.db(), &auth_user.id).await?;

    Ok(Json(user.into()))
}

/// Update the caller's own profile
pub async fn update_me(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = UserService::update_profile(
        state.db(),
        &auth_user.id,
        payload.name.as_deref(),
        payload.student_id.as_deref(),
        payload.department.as_deref(),
        payload.batch.as_deref(),
    )
    .await?;

    Ok(Json(user.into()))
}

/// List users (admin directory)
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UsersListResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can list users".to_string(),
        ));
    }

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (users, total) = UserService::list_users(
        state.db(),
        page,
        per_page,
        query.role.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(UsersListResponse {
        users: users.into_iter().map(Into::into).collect(),
        total,
        page,
        per_page,
    }))
}

/// Get a user by ID (self or admin)
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    if id != auth_user.id && !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Cannot view other users' profiles".to_string(),
        ));
    }

    let user = UserService::get_user(state.db(), &id).await?;

    Ok(Json(user.into()))
}
