//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod chatbot_service;
pub mod leaderboard_service;
pub mod notification_service;
pub mod project_service;
pub mod submission_service;
pub mod team_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use chatbot_service::ChatbotService;
pub use leaderboard_service::LeaderboardService;
pub use notification_service::NotificationService;
pub use project_service::ProjectService;
pub use submission_service::SubmissionService;
pub use team_service::TeamService;
pub use user_service::UserService;
