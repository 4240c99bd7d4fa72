//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod admin_log;
pub mod chat;
pub mod feedback;
pub mod leaderboard;
pub mod notification;
pub mod project;
pub mod submission;
pub mod supervisor_request;
pub mod team;
pub mod user;

pub use admin_log::*;
pub use chat::*;
pub use feedback::*;
pub use leaderboard::*;
pub use notification::*;
pub use project::*;
pub use submission::*;
pub use supervisor_request::*;
pub use team::*;
pub use user::*;
