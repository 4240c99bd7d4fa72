//! Project handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Project routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_project))
        .route("/", get(handler::list_projects))
        .route("/{id}", get(handler::get_project))
        .route("/{id}", put(handler::update_project))
        .route("/{id}", delete(handler::delete_project))
        .route("/{id}/enroll", post(handler::enroll))
        .route("/{id}/teams", get(handler::list_teams))
        .route("/{id}/leaderboard", get(handler::get_leaderboard))
}
