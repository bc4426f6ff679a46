//! Reservation model and DTOs.

use chrono::NaiveDate;
use logistica_core::status::ReservationStatus;
use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `gestion_reserva.reservations`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub code: String,
    pub client_id: DbId,
    pub route_id: DbId,
    pub tariff_id: Option<DbId>,
    pub container_count: i32,
    pub reserved_for: NaiveDate,
    #[sqlx(try_from = "String")]
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReservation {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    pub client_id: DbId,
    pub route_id: DbId,
    pub tariff_id: Option<DbId>,
    #[validate(range(min = 1))]
    pub container_count: i32,
    pub reserved_for: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReservation {
    pub tariff_id: Option<DbId>,
    #[validate(range(min = 1))]
    pub container_count: Option<i32>,
    pub reserved_for: Option<NaiveDate>,
    pub status: Option<ReservationStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    pub client_id: Option<DbId>,
}
