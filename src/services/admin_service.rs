//! Admin service - supervisor access requests, audit log, dashboard stats

use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::SmtpConfig,
    constants::roles,
    db::repositories::{AdminRepository, UserRepository},
    error::{AppError, AppResult},
    models::{AdminLog, ApprovalStatus, NotificationKind, SupervisorRequest, User},
    services::NotificationService,
    state::Mailer,
    utils::validation,
};

/// Dashboard statistics
#[derive(Debug, serde::Serialize)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_supervisors: i64,
    pub total_students: i64,
    pub pending_requests: i64,
}

/// Admin service
pub struct AdminService;

impl AdminService {
    /// Submit a supervisor access request (pre-auth, public form)
    pub async fn submit_request(
        pool: &PgPool,
        name: &str,
        email: &str,
        department: &str,
        staff_id: &str,
    ) -> AppResult<SupervisorRequest> {
        validation::validate_email(email)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::Conflict(
                "A user with this email already exists".to_string(),
            ));
        }

        AdminRepository::create_request(pool, name, email, department, staff_id).await
    }

    /// List pending supervisor requests
    pub async fn list_pending_requests(pool: &PgPool) -> AppResult<Vec<SupervisorRequest>> {
        AdminRepository::list_pending_requests(pool).await
    }

    /// Approve a supervisor request, creating the supervisor identity.
    ///
    /// The requester is never promoted in place; approval mints a new
    /// SUPERVISOR user from the request details.
    pub async fn approve_request(
        pool: &PgPool,
        mailer: Option<(&Mailer, &SmtpConfig)>,
        request_id: &Uuid,
        admin_id: &Uuid,
    ) -> AppResult<User> {
        let request = AdminRepository::find_request(pool, request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Supervisor request not found".to_string()))?;

        if !request.is_pending() {
            return Err(AppError::InvalidState(
                "Request has already been processed".to_string(),
            ));
        }

        let supervisor = UserRepository::create_supervisor(
            pool,
            &request.email,
            &request.name,
            &request.department,
            &request.staff_id,
        )
        .await?;

        AdminRepository::decide_request(
            pool,
            request_id,
            ApprovalStatus::Approved.as_str(),
            admin_id,
        )
        .await?;

        AdminRepository::insert_log(
            pool,
            admin_id,
            "approve_supervisor_request",
            "supervisor_request",
            Some(request_id),
            Some(json!({ "supervisor_id": supervisor.id, "email": supervisor.email })),
        )
        .await?;

        NotificationService::notify(
            pool,
            mailer,
            &supervisor.id,
            NotificationKind::SupervisorRequestDecision,
            "Supervisor access approved",
            "Your supervisor access request has been approved. You can now log in.",
        )
        .await;

        Ok(supervisor)
    }

    /// Reject a supervisor request
    pub async fn reject_request(
        pool: &PgPool,
        mailer: Option<(&Mailer, &SmtpConfig)>,
        request_id: &Uuid,
        admin_id: &Uuid,
    ) -> AppResult<SupervisorRequest> {
        let request = AdminRepository::find_request(pool, request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Supervisor request not found".to_string()))?;

        if !request.is_pending() {
            return Err(AppError::InvalidState(
                "Request has already been processed".to_string(),
            ));
        }

        let request = AdminRepository::decide_request(
            pool,
            request_id,
            ApprovalStatus::Rejected.as_str(),
            admin_id,
        )
        .await?;

        AdminRepository::insert_log(
            pool,
            admin_id,
            "reject_supervisor_request",
            "supervisor_request",
            Some(request_id),
            Some(json!({ "email": request.email })),
        )
        .await?;

        // The requester has no user row; decision goes out by email only
        NotificationService::notify_email(
            mailer,
            NotificationKind::SupervisorRequestDecision,
            &request.email,
            "Supervisor access rejected",
            "Your supervisor access request has been rejected. Contact the department admin for details.",
        )
        .await;

        Ok(request)
    }

    /// List the admin audit log, newest first
    pub async fn list_logs(pool: &PgPool, page: u32, per_page: u32) -> AppResult<Vec<AdminLog>> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        AdminRepository::list_logs(pool, offset, limit).await
    }

    /// Dashboard statistics
    pub async fn stats(pool: &PgPool) -> AppResult<AdminStats> {
        Ok(AdminStats {
            total_users: UserRepository::count_by_role(pool, None).await?,
            total_supervisors: UserRepository::count_by_role(pool, Some(roles::SUPERVISOR)).await?,
            total_students: UserRepository::count_by_role(pool, Some(roles::STUDENT)).await?,
            pending_requests: AdminRepository::count_pending_requests(pool).await?,
        })
    }
}
