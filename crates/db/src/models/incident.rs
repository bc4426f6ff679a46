//! Incident model, its lookups, and DTOs.

use logistica_core::types::{DbId, Timestamp};
use logistica_core::validation::{MAX_SEVERITY, MIN_SEVERITY};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `operaciones_portuarias.incident_types` or `incident_statuses`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IncidentLookup {
    pub id: DbId,
    pub code: String,
    pub name: String,
}

/// A row from `operaciones_portuarias.incidents`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: DbId,
    pub code: String,
    pub operation_id: DbId,
    pub incident_type_id: DbId,
    pub incident_status_id: DbId,
    pub description: String,
    /// Severity grade from 1 (minor) to 5 (critical).
    pub severity: i16,
    pub occurred_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIncident {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    pub operation_id: DbId,
    pub incident_type_id: DbId,
    /// Defaults to the `open` status if omitted.
    pub incident_status_id: Option<DbId>,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[validate(range(min = MIN_SEVERITY, max = MAX_SEVERITY))]
    pub severity: i16,
    pub occurred_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateIncident {
    pub incident_type_id: Option<DbId>,
    pub incident_status_id: Option<DbId>,
    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,
    #[validate(range(min = MIN_SEVERITY, max = MAX_SEVERITY))]
    pub severity: Option<i16>,
    pub occurred_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentFilter {
    pub operation_id: Option<DbId>,
}
