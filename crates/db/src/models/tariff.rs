//! Tariff model and DTOs.

use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `gestion_reserva.tariffs`. Amounts are stored in cents.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tariff {
    pub id: DbId,
    pub code: String,
    pub route_id: DbId,
    pub container_type: String,
    pub amount_cents: i64,
    pub currency: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTariff {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    pub route_id: DbId,
    #[validate(length(min = 1, max = 32))]
    pub container_type: String,
    #[validate(range(min = 0))]
    pub amount_cents: i64,
    /// Defaults to `USD` if omitted.
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTariff {
    #[validate(length(min = 1, max = 32))]
    pub container_type: Option<String>,
    #[validate(range(min = 0))]
    pub amount_cents: Option<i64>,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TariffFilter {
    pub route_id: Option<DbId>,
}
