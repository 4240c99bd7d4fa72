//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Auth routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/verify-otp", post(handler::verify_otp))
        .route("/admin-login", post(handler::admin_login))
        .route("/verify-token", post(handler::verify_token))
        .route("/supervisor-request", post(handler::submit_supervisor_request))
}
