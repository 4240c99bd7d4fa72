//! Submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/teams/{team_id}/{stage}", post(handler::upload_submission))
        .route("/teams/{team_id}", get(handler::get_team_submissions))
        .route("/{id}", get(handler::get_submission))
        .route("/{id}/approvals", get(handler::list_approvals))
        .route("/{id}/approval", post(handler::record_approval))
        .route(
            "/{id}/supervisor-feedback",
            post(handler::record_supervisor_feedback),
        )
        .route("/{id}/admin-feedback", post(handler::record_admin_feedback))
        .route("/{id}/feedback", get(handler::get_feedback))
}
