//! Supervisor dashboard handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Supervisor routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submissions", get(handler::list_pending_submissions))
        .route("/submissions/{id}", get(handler::get_submission_detail))
        .route("/stats", get(handler::get_stats))
}
