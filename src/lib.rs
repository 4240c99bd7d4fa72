//! ProjHub - Academic Project Management Backend
//!
//! This library provides the core functionality for the ProjHub platform,
//! a project-management backend for academic institutions.
//!
//! # Features
//!
//! - Email OTP login with a separate admin password path
//! - Admin-defined projects with token-gated enrollment
//! - Team formation with an invitation protocol and lifecycle states
//! - Staged submissions with peer-approval quorum and two-tier scoring
//! - Deterministic per-project leaderboards
//! - FAQ-first chatbot backed by an external LLM
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
