//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_JWT_EXPIRY_HOURS, DEFAULT_OTP_EXPIRY_MINUTES,
    DEFAULT_OTP_LENGTH, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub otp: OtpConfig,
    pub smtp: Option<SmtpConfig>,
    pub chatbot: ChatbotConfig,
    pub workflow: WorkflowConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

/// One-time-passcode configuration
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Number of digits in a generated passcode
    pub length: usize,
    /// Passcode lifetime in minutes
    pub expiry_minutes: i64,
}

/// SMTP configuration for outbound notification email
///
/// Absent when SMTP_HOST is not set; notification intents are then
/// persisted and logged only.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
}

/// Chatbot LLM configuration
#[derive(Debug, Clone)]
pub struct ChatbotConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

/// Workflow policy knobs
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// When true, submissions may only be uploaded once the team is LOCKED.
    /// Default allows uploads for both ACTIVE and LOCKED teams.
    pub upload_requires_locked_team: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            otp: OtpConfig::from_env()?,
            smtp: SmtpConfig::from_env()?,
            chatbot: ChatbotConfig::from_env()?,
            workflow: WorkflowConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl OtpConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            length: env::var("OTP_LENGTH")
                .unwrap_or_else(|_| DEFAULT_OTP_LENGTH.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("OTP_LENGTH".to_string()))?,
            expiry_minutes: env::var("OTP_EXPIRY_MINUTES")
                .unwrap_or_else(|_| DEFAULT_OTP_EXPIRY_MINUTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("OTP_EXPIRY_MINUTES".to_string()))?,
        })
    }
}

impl SmtpConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(host) = env::var("SMTP_HOST") else {
            return Ok(None);
        };

        Ok(Some(Self {
            host,
            port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SMTP_PORT".to_string()))?,
            username: env::var("SMTP_USERNAME")
                .map_err(|_| ConfigError::Missing("SMTP_USERNAME".to_string()))?,
            password: env::var("SMTP_PASSWORD")
                .map_err(|_| ConfigError::Missing("SMTP_PASSWORD".to_string()))?,
            from_email: env::var("SMTP_FROM_EMAIL")
                .map_err(|_| ConfigError::Missing("SMTP_FROM_EMAIL".to_string()))?,
            from_name: env::var("SMTP_FROM_NAME")
                .unwrap_or_else(|_| "ProjHub".to_string()),
        }))
    }
}

impl ChatbotConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: env::var("CHATBOT_API_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1/chat/completions".to_string()),
            api_key: env::var("CHATBOT_API_KEY")
                .map_err(|_| ConfigError::Missing("CHATBOT_API_KEY".to_string()))?,
            model: env::var("CHATBOT_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
        })
    }
}

impl WorkflowConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            upload_requires_locked_team: env::var("UPLOAD_REQUIRES_LOCKED_TEAM")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);

        let otp = OtpConfig {
            length: DEFAULT_OTP_LENGTH,
            expiry_minutes: DEFAULT_OTP_EXPIRY_MINUTES,
        };
        assert_eq!(otp.length, 6);
        assert_eq!(otp.expiry_minutes, 5);
    }
}
