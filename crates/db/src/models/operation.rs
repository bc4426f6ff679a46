//! Maritime operation model and DTOs.

use logistica_core::status::OperationStatus;
use logistica_core::types::{DbId, Timestamp};
use logistica_core::validation::{MAX_PROGRESS, MIN_PROGRESS};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `gestion_maritima.operations`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Operation {
    pub id: DbId,
    pub code: String,
    pub vessel_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: OperationStatus,
    pub container_count: i32,
    pub progress: i16,
    pub origin_port: Option<String>,
    pub destination_port: Option<String>,
    pub departed_at: Option<Timestamp>,
    pub estimated_arrival: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new operation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOperation {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    pub vessel_id: DbId,
    /// Defaults to `registered` if omitted.
    pub status: Option<OperationStatus>,
    #[validate(range(min = 0))]
    pub container_count: Option<i32>,
    #[validate(range(min = MIN_PROGRESS, max = MAX_PROGRESS))]
    pub progress: Option<i16>,
    pub origin_port: Option<String>,
    pub destination_port: Option<String>,
    pub departed_at: Option<Timestamp>,
    pub estimated_arrival: Option<Timestamp>,
}

/// DTO for updating an operation. Status changes go through the
/// dedicated transition endpoint, not through this DTO.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOperation {
    pub vessel_id: Option<DbId>,
    #[validate(range(min = 0))]
    pub container_count: Option<i32>,
    #[validate(range(min = MIN_PROGRESS, max = MAX_PROGRESS))]
    pub progress: Option<i16>,
    pub origin_port: Option<String>,
    pub destination_port: Option<String>,
    pub departed_at: Option<Timestamp>,
    pub estimated_arrival: Option<Timestamp>,
}

/// Body for `PUT /operaciones/{id}/estado`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionOperation {
    pub status: OperationStatus,
}

/// Filters accepted by the operation list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationFilter {
    pub status: Option<OperationStatus>,
    pub vessel_id: Option<DbId>,
}

/// Per-status count for the operations dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    #[sqlx(try_from = "String")]
    pub status: OperationStatus,
    pub count: i64,
}

/// Dashboard summary of all operations.
#[derive(Debug, Clone, Serialize)]
pub struct OperationSummary {
    pub total: i64,
    pub by_status: Vec<StatusCount>,
    /// Mean progress of operations that are neither completed nor cancelled.
    pub average_active_progress: f64,
    pub containers_in_flight: i64,
}
