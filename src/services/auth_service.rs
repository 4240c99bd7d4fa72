//! Authentication service
//!
//! Login is passwordless for students and supervisors: a one-time passcode
//! is emailed and exchanged for a JWT. Admins authenticate with a password
//! instead. Passcodes are stored hashed in redis under a TTL, so at most
//! one passcode per email is live at a time.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    config::Config,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::{NotificationKind, User},
    services::NotificationService,
    state::Mailer,
    utils::crypto,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Outcome of a login request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginChallenge {
    /// An OTP was generated and emailed to the address
    OtpSent,
    /// The address belongs to an admin; a password is required instead
    PasswordRequired,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Start a login: admins are redirected to the password path, everyone
    /// else receives a one-time passcode by email.
    pub async fn request_login(
        pool: &PgPool,
        mut redis: ConnectionManager,
        mailer: Option<(&Mailer, &crate::config::SmtpConfig)>,
        config: &Config,
        email: &str,
    ) -> AppResult<LoginChallenge> {
        let user = UserRepository::find_by_email(pool, email).await?;

        if let Some(user) = &user {
            if user.is_admin() {
                return Ok(LoginChallenge::PasswordRequired);
            }
        }

        let otp = crypto::generate_otp(config.otp.length);

        // Hashed at rest; SET replaces any previous live passcode
        let key = Self::otp_key(email);
        let ttl = (config.otp.expiry_minutes * 60) as u64;
        redis
            .set_ex::<_, _, ()>(&key, crypto::hash_string(&otp), ttl)
            .await?;

        let title = "Your login code";
        let body = format!(
            "Your one-time login code is {}. It expires in {} minutes.",
            otp, config.otp.expiry_minutes
        );

        match &user {
            Some(user) => {
                NotificationService::notify(pool, mailer, &user.id, NotificationKind::Otp, title, &body)
                    .await
            }
            // First-time logins have no user row yet; email only
            None => {
                NotificationService::notify_email(mailer, NotificationKind::Otp, email, title, &body)
                    .await
            }
        }

        Ok(LoginChallenge::OtpSent)
    }

    /// Exchange a one-time passcode for a JWT.
    ///
    /// A first login auto-provisions a student identity for the address.
    pub async fn verify_otp(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        email: &str,
        otp: &str,
    ) -> AppResult<(User, String, i64)> {
        let key = Self::otp_key(email);
        let stored: Option<String> = redis.get(&key).await?;

        let Some(stored_hash) = stored else {
            return Err(AppError::InvalidOtp);
        };

        if !crypto::verify_hash(otp, &stored_hash) {
            return Err(AppError::InvalidOtp);
        }

        // Single use
        redis.del::<_, ()>(&key).await?;

        let user = match UserRepository::find_by_email(pool, email).await? {
            Some(user) => user,
            None => {
                let name = Self::display_name_from_email(email);
                UserRepository::create_student(pool, email, &name).await?
            }
        };

        let (token, expires_in) = Self::generate_access_token(&user, config)?;

        Ok((user, token, expires_in))
    }

    /// Admin login with email and password
    pub async fn admin_login(
        pool: &PgPool,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String, i64)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .filter(|u| u.is_admin())
            .ok_or(AppError::InvalidCredentials)?;

        let Some(hash) = user.password_hash.as_deref() else {
            return Err(AppError::InvalidCredentials);
        };

        if !Self::verify_password(password, hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let (token, expires_in) = Self::generate_access_token(&user, config)?;

        Ok((user, token, expires_in))
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Derive a display name from an email local part:
    /// "jane.doe@uni.edu" becomes "Jane Doe".
    pub fn display_name_from_email(email: &str) -> String {
        let local = email.split('@').next().unwrap_or(email);

        local
            .split(['.', '_', '-'])
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Verify password against an argon2 hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token
    fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }

    fn otp_key(email: &str) -> String {
        format!("otp:{}", email.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(
            AuthService::display_name_from_email("jane.doe@uni.edu"),
            "Jane Doe"
        );
        assert_eq!(
            AuthService::display_name_from_email("ravi_kumar@college.ac.in"),
            "Ravi Kumar"
        );
        assert_eq!(AuthService::display_name_from_email("solo@uni.edu"), "Solo");
    }

    #[test]
    fn test_otp_key_is_case_insensitive() {
        assert_eq!(
            AuthService::otp_key("Jane.Doe@Uni.edu"),
            AuthService::otp_key("jane.doe@uni.edu")
        );
    }
}
