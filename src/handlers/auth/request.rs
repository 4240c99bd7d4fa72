//! Auth request DTOs

use serde::Deserialize;
use validator::Validate;

/// Start-login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
}

/// OTP verification request
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 4, max = 10))]
    pub otp: String,
}

/// Admin password login request
#[derive(Debug, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Token verification request
#[derive(Debug, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

/// Supervisor access request
#[derive(Debug, Deserialize, Validate)]
pub struct SupervisorAccessRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub department: String,

    #[validate(length(min = 1, max = 64))]
    pub staff_id: String,
}
