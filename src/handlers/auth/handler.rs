//! Auth handler implementations

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::{AdminService, AuthService, auth_service::LoginChallenge},
    state::AppState,
};

use super::{
    request::{
        AdminLoginRequest, LoginRequest, SupervisorAccessRequest, VerifyOtpRequest,
        VerifyTokenRequest,
    },
    response::{LoginResponse, SupervisorRequestResponse, TokenResponse, VerifyTokenResponse},
};

/// Start a login: sends an OTP, or asks admins for their password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let mailer = state.mailer().zip(state.config().smtp.as_ref());
    let challenge = AuthService::request_login(
        state.db(),
        state.redis(),
        mailer,
        state.config(),
        &payload.email,
    )
    .await?;

    let response = match challenge {
        LoginChallenge::OtpSent => LoginResponse {
            status: "otp_sent",
            message: "A one-time login code has been sent to your email",
            email: payload.email,
        },
        LoginChallenge::PasswordRequired => LoginResponse {
            status: "password_required",
            message: "Please provide your password",
            email: payload.email,
        },
    };

    Ok(Json(response))
}

/// Exchange an OTP for an access token
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> AppResult<Json<TokenResponse>> {
    payload.validate()?;

    let (user, token, expires_in) = AuthService::verify_otp(
        state.db(),
        state.redis(),
        state.config(),
        &payload.email,
        &payload.otp,
    )
    .await?;

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "Bearer",
        expires_in,
        user_id: user.id,
        role: user.role,
        name: user.name,
    }))
}

/// Admin login with password
pub async fn admin_login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    payload.validate()?;

    let (user, token, expires_in) =
        AuthService::admin_login(state.db(), state.config(), &payload.email, &payload.password)
            .await?;

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "Bearer",
        expires_in,
        user_id: user.id,
        role: user.role,
        name: user.name,
    }))
}

/// Verify a token and echo its identity claims
pub async fn verify_token(
    State(state): State<AppState>,
    Json(payload): Json<VerifyTokenRequest>,
) -> AppResult<Json<VerifyTokenResponse>> {
    let claims = AuthService::verify_token(&payload.token, &state.config().jwt.secret)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    Ok(Json(VerifyTokenResponse {
        valid: true,
        user_id,
        email: claims.email,
        role: claims.role,
    }))
}

/// Submit a supervisor access request (decided later by an admin)
pub async fn submit_supervisor_request(
    State(state): State<AppState>,
    Json(payload): Json<SupervisorAccessRequest>,
) -> AppResult<(StatusCode, Json<SupervisorRequestResponse>)> {
    payload.validate()?;

    let request = AdminService::submit_request(
        state.db(),
        &payload.name,
        &payload.email,
        &payload.department,
        &payload.staff_id,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SupervisorRequestResponse {
            id: request.id,
            status: request.status,
            requested_at: request.requested_at,
        }),
    ))
}
