//! Shipping route model and DTOs.

use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `gestion_reserva.shipping_routes`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShippingRoute {
    pub id: DbId,
    pub code: String,
    pub origin: String,
    pub destination: String,
    pub transit_days: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShippingRoute {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1, max = 100))]
    pub origin: String,
    #[validate(length(min = 1, max = 100))]
    pub destination: String,
    #[validate(range(min = 1))]
    pub transit_days: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateShippingRoute {
    #[validate(length(min = 1, max = 100))]
    pub origin: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub destination: Option<String>,
    #[validate(range(min = 1))]
    pub transit_days: Option<i32>,
}
