//! Team handlers

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

/// Team routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_team))
        .route("/{id}", get(handler::get_team))
        .route("/{id}/members", get(handler::get_members))
        .route("/{id}/invitations", post(handler::invite_member))
        .route(
            "/invitations/{invitation_id}/respond",
            post(handler::respond_to_invitation),
        )
        .route("/{id}/lock", post(handler::lock_team))
}
