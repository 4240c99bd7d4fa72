//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default one-time-passcode length in digits
pub const DEFAULT_OTP_LENGTH: usize = 6;

/// Default one-time-passcode lifetime in minutes
pub const DEFAULT_OTP_EXPIRY_MINUTES: i64 = 5;

/// Length of generated project enrollment tokens
pub const ENROLLMENT_TOKEN_LENGTH: usize = 32;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const SUPERVISOR: &str = "supervisor";
    pub const STUDENT: &str = "student";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, SUPERVISOR, STUDENT];
}

// =============================================================================
// SUBMISSION STAGES
// =============================================================================

/// Submission stage identifiers, in checkpoint order
pub mod stages {
    pub const SYNOPSIS: &str = "synopsis";
    pub const PROGRESS_1: &str = "progress_1";
    pub const PROGRESS_2: &str = "progress_2";
    pub const FINAL_SUBMISSION: &str = "final_submission";

    /// All stages, ordered
    pub const ALL: &[&str] = &[SYNOPSIS, PROGRESS_1, PROGRESS_2, FINAL_SUBMISSION];
}

// =============================================================================
// LIFECYCLE STATUSES
// =============================================================================

/// Team lifecycle statuses
pub mod team_statuses {
    pub const PENDING: &str = "pending";
    pub const ACTIVE: &str = "active";
    pub const LOCKED: &str = "locked";
    pub const INACTIVE: &str = "inactive";
}

/// Approval statuses shared by invitations, peer votes, and access requests
pub mod approval_statuses {
    pub const PENDING: &str = "pending";
    pub const APPROVED: &str = "approved";
    pub const REJECTED: &str = "rejected";
}

// =============================================================================
// SCORING
// =============================================================================

/// Maximum supervisor score per submission
pub const SUPERVISOR_SCORE_MAX: f64 = 10.0;

/// Maximum admin score per submission
pub const ADMIN_SCORE_MAX: f64 = 20.0;

/// Maximum attainable final score (supervisor average + admin score)
pub const FINAL_SCORE_MAX: f64 = 30.0;

// =============================================================================
// NOTIFICATION KINDS
// =============================================================================

/// Notification intent kinds emitted by the core
pub mod notification_kinds {
    pub const OTP: &str = "otp";
    pub const TEAM_INVITATION: &str = "team_invitation";
    pub const SUBMISSION_FOR_APPROVAL: &str = "submission_for_approval";
    pub const SUPERVISOR_FEEDBACK: &str = "supervisor_feedback";
    pub const SUPERVISOR_REQUEST_DECISION: &str = "supervisor_request_decision";
}

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Chatbot endpoint - max requests
    pub const CHATBOT_MAX_REQUESTS: i64 = 10;
    /// Chatbot endpoint - window in seconds
    pub const CHATBOT_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum team name length
pub const MAX_TEAM_NAME_LENGTH: u64 = 128;

/// Maximum project title length
pub const MAX_PROJECT_TITLE_LENGTH: u64 = 256;

/// Maximum project description length
pub const MAX_PROJECT_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum feedback comment length
pub const MAX_COMMENT_LENGTH: u64 = 8192;

/// Maximum chatbot question length
pub const MAX_QUESTION_LENGTH: u64 = 2048;
