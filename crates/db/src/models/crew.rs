//! Crew member and crew-language models and DTOs.

use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `gestion_maritima.crew_members`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CrewMember {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    pub nationality: Option<String>,
    pub operation_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `crew_member_languages`, joined with the language name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CrewMemberLanguage {
    pub id: DbId,
    pub crew_member_id: DbId,
    pub language_id: DbId,
    pub language_code: String,
    pub language_name: String,
    pub proficiency_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCrewMember {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 64))]
    pub rank: String,
    pub nationality: Option<String>,
    pub operation_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCrewMember {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub rank: Option<String>,
    pub nationality: Option<String>,
    pub operation_id: Option<DbId>,
}

/// Body for adding a spoken language to a crew member.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCrewLanguage {
    pub language_id: DbId,
    #[validate(length(min = 1, max = 32))]
    pub proficiency_level: Option<String>,
}
