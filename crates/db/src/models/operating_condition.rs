//! Operating condition lookup and its operation join.

use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `gestion_maritima.operating_conditions`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OperatingCondition {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A condition attached to an operation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OperationCondition {
    pub id: DbId,
    pub operation_id: DbId,
    pub condition_id: DbId,
    pub condition_code: String,
    pub condition_name: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOperatingCondition {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkCondition {
    pub condition_id: DbId,
    pub notes: Option<String>,
}
