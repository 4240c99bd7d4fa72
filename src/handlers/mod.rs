//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod chatbot;
pub mod health;
pub mod notifications;
pub mod projects;
pub mod submissions;
pub mod supervisor;
pub mod teams;
pub mod users;

use axum::{Router, middleware};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/users", users::routes())
        .nest("/projects", projects::routes())
        .nest("/teams", teams::routes())
        .nest("/submissions", submissions::routes())
        .nest("/supervisor", supervisor::routes())
        .nest("/admin", admin::routes())
        .nest("/chatbot", chatbot::routes())
        .nest("/notifications", notifications::routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .merge(protected)
}
