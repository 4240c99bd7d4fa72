//! Admin handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/requests", get(handler::list_supervisor_requests))
        .route("/requests/{id}/approve", post(handler::approve_supervisor_request))
        .route("/requests/{id}/reject", post(handler::reject_supervisor_request))
        .route("/logs", get(handler::list_logs))
        .route("/stats", get(handler::get_stats))
}
