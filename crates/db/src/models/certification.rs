//! Certification and operation-certification models and DTOs.

use logistica_core::status::ApprovalStatus;
use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from `gestion_maritima.certifications`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certification {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
    /// Country where the certification applies.
    pub country: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `operation_certifications` join table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OperationCertification {
    pub id: DbId,
    pub operation_id: DbId,
    pub certification_id: DbId,
    #[sqlx(try_from = "String")]
    pub approval_status: ApprovalStatus,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Join row enriched with the certification it points at, used when
/// listing the certifications of an operation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OperationCertificationDetail {
    pub id: DbId,
    pub operation_id: DbId,
    pub certification_id: DbId,
    pub certification_code: String,
    pub certification_name: String,
    pub expires_at: Timestamp,
    #[sqlx(try_from = "String")]
    pub approval_status: ApprovalStatus,
    pub approved_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCertification {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
    #[validate(length(min = 2, max = 64))]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCertification {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub issued_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    #[validate(length(min = 2, max = 64))]
    pub country: Option<String>,
}

/// Body for attaching a certification to an operation.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkCertification {
    pub certification_id: DbId,
}

/// Body for approving or rejecting an attached certification.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewCertification {
    pub approval_status: ApprovalStatus,
}
