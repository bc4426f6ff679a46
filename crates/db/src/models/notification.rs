//! Sensor notification models and DTOs.

use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `monitoreo.notification_types`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationType {
    pub id: DbId,
    pub code: String,
    pub name: String,
}

/// A row from `monitoreo.notifications`, joined with its type code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub sensor_id: DbId,
    pub notification_type_id: DbId,
    pub notification_type: String,
    pub value: f64,
    pub recorded_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotification {
    pub sensor_id: DbId,
    pub notification_type_id: DbId,
    pub value: f64,
    /// Defaults to the insert time if omitted.
    pub recorded_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationFilter {
    pub notification_type_id: Option<DbId>,
}
