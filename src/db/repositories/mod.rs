//! Database repositories
//!
//! One repository per aggregate; repositories hold no state and take the
//! connection pool (or an open transaction) per call.

pub mod admin_repo;
pub mod chat_repo;
pub mod feedback_repo;
pub mod notification_repo;
pub mod project_repo;
pub mod submission_repo;
pub mod team_repo;
pub mod user_repo;

pub use admin_repo::AdminRepository;
pub use chat_repo::ChatRepository;
pub use feedback_repo::FeedbackRepository;
pub use notification_repo::NotificationRepository;
pub use project_repo::ProjectRepository;
pub use submission_repo::SubmissionRepository;
pub use team_repo::TeamRepository;
pub use user_repo::UserRepository;
