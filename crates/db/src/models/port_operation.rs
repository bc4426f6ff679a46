//! Port operation model and DTOs.

use logistica_core::status::{PortOperationKind, PortOperationStatus};
use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `operaciones_portuarias.port_operations`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortOperation {
    pub id: DbId,
    pub code: String,
    pub operation_id: Option<DbId>,
    pub berth: String,
    #[sqlx(try_from = "String")]
    pub kind: PortOperationKind,
    #[sqlx(try_from = "String")]
    pub status: PortOperationStatus,
    pub scheduled_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortOperation {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    pub operation_id: Option<DbId>,
    #[validate(length(min = 1, max = 32))]
    pub berth: String,
    pub kind: PortOperationKind,
    pub scheduled_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePortOperation {
    #[validate(length(min = 1, max = 32))]
    pub berth: Option<String>,
    pub status: Option<PortOperationStatus>,
    pub scheduled_at: Option<Timestamp>,
}
