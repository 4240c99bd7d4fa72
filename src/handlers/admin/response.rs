//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{AdminLog, SupervisorRequest};

/// Supervisor request detail
#[derive(Debug, Serialize)]
pub struct SupervisorRequestDetail {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
    pub staff_id: String,
    pub status: String,
    pub requested_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl From<SupervisorRequest> for SupervisorRequestDetail {
    fn from(request: SupervisorRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            email: request.email,
            department: request.department,
            staff_id: request.staff_id,
            status: request.status,
            requested_at: request.requested_at,
            decided_at: request.decided_at,
        }
    }
}

/// Audit log entry response
#[derive(Debug, Serialize)]
pub struct AdminLogResponse {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<Uuid>,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<AdminLog> for AdminLogResponse {
    fn from(log: AdminLog) -> Self {
        Self {
            id: log.id,
            admin_id: log.admin_id,
            action: log.action,
            resource_type: log.resource_type,
            resource_id: log.resource_id,
            details: log.details,
            created_at: log.created_at,
        }
    }
}

/// Request decision receipt
#[derive(Debug, Serialize)]
pub struct RequestDecisionResponse {
    pub request_id: Uuid,
    pub status: String,
    pub supervisor_id: Option<Uuid>,
}
