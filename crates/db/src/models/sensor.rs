//! Sensor model and DTOs.

use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `monitoreo.sensors`. Every sensor belongs to one container.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sensor {
    pub id: DbId,
    pub code: String,
    pub container_id: DbId,
    /// Physical quantity measured (e.g. `temperature`, `humidity`).
    pub sensor_type: String,
    /// Function within the container (e.g. `primary`, `backup`).
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSensor {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    pub container_id: DbId,
    #[validate(length(min = 1, max = 32))]
    pub sensor_type: String,
    #[validate(length(min = 1, max = 32))]
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSensor {
    #[validate(length(min = 1, max = 32))]
    pub sensor_type: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub role: Option<String>,
    pub is_active: Option<bool>,
}
