//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use lettre::{AsyncSmtpTransport, Tokio1Executor};
use redis::aio::ConnectionManager;
use sqlx::PgPool;

use crate::config::Config;
use crate::services::chatbot_service::ChatModel;

/// Outbound SMTP transport used by the notification gateway
pub type Mailer = AsyncSmtpTransport<Tokio1Executor>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Redis connection manager
    pub redis: ConnectionManager,

    /// SMTP transport, absent when email delivery is not configured
    pub mailer: Option<Mailer>,

    /// Chat model backing the chatbot fallback path
    pub chat_model: Arc<dyn ChatModel>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        db: PgPool,
        redis: ConnectionManager,
        mailer: Option<Mailer>,
        chat_model: Arc<dyn ChatModel>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                redis,
                mailer,
                chat_model,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a clone of the Redis connection manager
    pub fn redis(&self) -> ConnectionManager {
        self.inner.redis.clone()
    }

    /// Get a reference to the SMTP transport, if configured
    pub fn mailer(&self) -> Option<&Mailer> {
        self.inner.mailer.as_ref()
    }

    /// Get a reference to the chat model
    pub fn chat_model(&self) -> &Arc<dyn ChatModel> {
        &self.inner.chat_model
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
