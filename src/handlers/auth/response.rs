//! Auth response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Start-login response: which challenge applies to the address
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub email: String,
}

/// Successful token issue
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user_id: Uuid,
    pub role: String,
    pub name: String,
}

/// Token verification response
#[derive(Debug, Serialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

/// Supervisor access request receipt
#[derive(Debug, Serialize)]
pub struct SupervisorRequestResponse {
    pub id: Uuid,
    pub status: String,
    pub requested_at: DateTime<Utc>,
}
