//! Notification gateway
//!
//! The core emits notification intents; delivery is a collaborator concern.
//! Every intent is persisted as an in-app notification row and, when an
//! SMTP transport is configured, additionally sent by email. Callers invoke
//! the gateway only after the triggering state transition has committed,
//! and delivery failures are logged and swallowed - they never surface as
//! operation errors.

use lettre::{
    AsyncTransport, Message,
    message::{Mailbox, header::ContentType},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::SmtpConfig,
    db::repositories::{NotificationRepository, UserRepository},
    error::AppResult,
    models::{Notification, NotificationKind},
    state::Mailer,
};

/// Notification gateway for intent emission
pub struct NotificationService;

impl NotificationService {
    /// Emit a notification intent to a known user. Fire-and-forget.
    pub async fn notify(
        pool: &PgPool,
        mailer: Option<(&Mailer, &SmtpConfig)>,
        recipient_id: &Uuid,
        kind: NotificationKind,
        title: &str,
        body: &str,
    ) {
        if let Err(e) =
            NotificationRepository::insert(pool, recipient_id, kind.as_str(), title, body).await
        {
            tracing::warn!(
                recipient = %recipient_id,
                kind = %kind,
                error = %e,
                "Failed to persist notification intent"
            );
        }

        let email = match UserRepository::find_by_id(pool, recipient_id).await {
            Ok(Some(user)) => Some(user.email),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(recipient = %recipient_id, error = %e, "Failed to resolve notification recipient");
                None
            }
        };

        if let (Some((mailer, smtp)), Some(email)) = (mailer, email) {
            Self::send_email(mailer, smtp, &email, title, body).await;
        }
    }

    /// Emit an email-only intent to an address with no user record yet
    /// (OTP for first-time logins, invitations to unregistered students).
    pub async fn notify_email(
        mailer: Option<(&Mailer, &SmtpConfig)>,
        kind: NotificationKind,
        to_email: &str,
        title: &str,
        body: &str,
    ) {
        match mailer {
            Some((mailer, smtp)) => Self::send_email(mailer, smtp, to_email, title, body).await,
            None => {
                tracing::info!(kind = %kind, to = %to_email, "Notification intent (no mailer configured)");
            }
        }
    }

    /// List a user's in-app notifications
    pub async fn list(
        pool: &PgPool,
        user_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Notification>> {
        NotificationRepository::list_for_user(pool, user_id, offset, limit).await
    }

    /// Mark one of the user's notifications as read
    pub async fn mark_read(
        pool: &PgPool,
        id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<Notification>> {
        NotificationRepository::mark_read(pool, id, user_id).await
    }

    async fn send_email(mailer: &Mailer, smtp: &SmtpConfig, to: &str, subject: &str, body: &str) {
        let from: Mailbox = match format!("{} <{}>", smtp.from_name, smtp.from_email).parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid sender mailbox; dropping email intent");
                return;
            }
        };

        let to_mailbox: Mailbox = match to.parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::warn!(to = %to, error = %e, "Invalid recipient mailbox; dropping email intent");
                return;
            }
        };

        let message = match Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
        {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(to = %to, error = %e, "Failed to build email; dropping intent");
                return;
            }
        };

        if let Err(e) = mailer.send(message).await {
            tracing::warn!(to = %to, error = %e, "Email delivery failed");
        } else {
            tracing::debug!(to = %to, subject = %subject, "Email delivered");
        }
    }
}
