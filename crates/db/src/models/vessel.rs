//! Vessel entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use logistica_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from `gestion_maritima.vessels`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vessel {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub imo_number: Option<String>,
    pub flag_country: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a vessel.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVessel {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(equal = 7))]
    pub imo_number: Option<String>,
    pub flag_country: Option<String>,
}

/// DTO for updating a vessel. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVessel {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(equal = 7))]
    pub imo_number: Option<String>,
    pub flag_country: Option<String>,
}
