//! Container model and DTOs.

use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `monitoreo.containers`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Container {
    pub id: DbId,
    pub code: String,
    pub container_type: String,
    pub operation_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContainer {
    #[validate(length(min = 4, max = 16))]
    pub code: String,
    #[validate(length(min = 1, max = 32))]
    pub container_type: String,
    pub operation_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContainer {
    #[validate(length(min = 1, max = 32))]
    pub container_type: Option<String>,
    pub operation_id: Option<DbId>,
}
