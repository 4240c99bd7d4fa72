//! Chatbot handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Chatbot routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ask", post(handler::ask))
        .route("/sessions", get(handler::get_history))
        .route("/sessions/{id}", delete(handler::delete_session))
}
