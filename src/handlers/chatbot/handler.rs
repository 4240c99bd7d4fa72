//! Chatbot handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ChatbotService,
    state::AppState,
};

use super::{
    request::{AskRequest, HistoryQuery},
    response::{AskResponse, ChatSessionResponse},
};

/// Ask the chatbot a question
pub async fn ask(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<AskRequest>,
) -> AppResult<Json<AskResponse>> {
    payload.validate()?;

    let session = ChatbotService::ask(
        state.db(),
        state.chat_model().as_ref(),
        &auth_user.id,
        &auth_user.role,
        &payload.question,
    )
    .await?;

    Ok(Json(AskResponse {
        session_id: session.id,
        answer: session.answer,
        created_at: session.created_at,
    }))
}

/// Get the caller's chat history
pub async fn get_history(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<ChatSessionResponse>>> {
    let limit = query.limit.unwrap_or(50).clamp(1, 200);

    let sessions = ChatbotService::history(state.db(), &auth_user.id, limit).await?;

    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}

/// Delete one of the caller's chat sessions
pub async fn delete_session(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ChatbotService::delete_session(state.db(), &id, &auth_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
