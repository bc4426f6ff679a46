//! Handlers for certifications and their approval on operations.
//!
//! - `/gestion-maritima/certificaciones` -- the certification catalogue.
//! - `/gestion-maritima/operaciones/{id}/certificaciones` -- certifications
//!   attached to one operation, each with a pending/approved/rejected state.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::status::ApprovalStatus;
use logistica_core::types::DbId;
use logistica_core::validation::require_ordered;
use logistica_db::models::certification::{
    Certification, CreateCertification, LinkCertification, OperationCertification,
    OperationCertificationDetail, ReviewCertification, UpdateCertification,
};
use logistica_db::repositories::CertificationRepo;
use validator::Validate;

use super::operation::find_operation;
use crate::error::{AppError, AppResult};
use crate::middleware::guard::{MaritimeAccess, RequireModule};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// POST /api/v1/gestion-maritima/certificaciones
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Json(input): Json<CreateCertification>,
) -> AppResult<(StatusCode, Json<Certification>)> {
    input.validate()?;
    require_ordered("issued_at", input.issued_at, "expires_at", input.expires_at)?;
    let certification = CertificationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(certification)))
}

/// GET /api/v1/gestion-maritima/certificaciones
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<Certification>>> {
    let certifications = CertificationRepo::list(&state.pool, page.into()).await?;
    Ok(Json(certifications))
}

/// GET /api/v1/gestion-maritima/certificaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Certification>> {
    let certification = find_certification(&state, id).await?;
    Ok(Json(certification))
}

/// PUT /api/v1/gestion-maritima/certificaciones/{id}
///
/// The validity window is re-checked against the stored dates when only one
/// end of it changes.
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCertification>,
) -> AppResult<Json<Certification>> {
    input.validate()?;
    if input.issued_at.is_some() || input.expires_at.is_some() {
        let existing = find_certification(&state, id).await?;
        require_ordered(
            "issued_at",
            input.issued_at.unwrap_or(existing.issued_at),
            "expires_at",
            input.expires_at.unwrap_or(existing.expires_at),
        )?;
    }
    let certification = CertificationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Certification",
            id,
        }))?;
    Ok(Json(certification))
}

/// DELETE /api/v1/gestion-maritima/certificaciones/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CertificationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Certification",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Operation links
// ---------------------------------------------------------------------------

/// GET /api/v1/gestion-maritima/operaciones/{id}/certificaciones
pub async fn list_for_operation(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(operation_id): Path<DbId>,
) -> AppResult<Json<Vec<OperationCertificationDetail>>> {
    find_operation(&state, operation_id).await?;
    let links = CertificationRepo::list_for_operation(&state.pool, operation_id).await?;
    Ok(Json(links))
}

/// POST /api/v1/gestion-maritima/operaciones/{id}/certificaciones
///
/// Attach a certification with `pending` approval. 409 if already attached.
pub async fn link(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(operation_id): Path<DbId>,
    Json(input): Json<LinkCertification>,
) -> AppResult<(StatusCode, Json<OperationCertification>)> {
    find_operation(&state, operation_id).await?;
    find_certification(&state, input.certification_id).await?;

    let link = CertificationRepo::link(&state.pool, operation_id, input.certification_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// PUT /api/v1/gestion-maritima/operaciones/{id}/certificaciones/{cert_id}
///
/// Approve or reject a pending certification.
pub async fn review(
    State(state): State<AppState>,
    RequireModule(user, _): RequireModule<MaritimeAccess>,
    Path((operation_id, certification_id)): Path<(DbId, DbId)>,
    Json(input): Json<ReviewCertification>,
) -> AppResult<Json<OperationCertification>> {
    // The pending check lives in the UPDATE so two concurrent reviews cannot
    // both succeed.
    let updated = if ApprovalStatus::Pending.can_transition_to(input.approval_status) {
        CertificationRepo::set_approval(
            &state.pool,
            operation_id,
            certification_id,
            input.approval_status,
        )
        .await?
    } else {
        None
    };

    let link = match updated {
        Some(link) => link,
        None => {
            let current = CertificationRepo::find_link(&state.pool, operation_id, certification_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "OperationCertification",
                    id: certification_id,
                }))?;
            return Err(review_refused(current.approval_status, input.approval_status));
        }
    };

    tracing::info!(
        operation_id = %operation_id,
        certification_id = %certification_id,
        approval_status = %link.approval_status,
        user_id = %user.user_id,
        "Certification reviewed",
    );
    Ok(Json(link))
}

fn review_refused(from: ApprovalStatus, to: ApprovalStatus) -> AppError {
    AppError::Core(CoreError::Validation(format!(
        "Certification approval cannot move from {from} to {to}"
    )))
}

/// DELETE /api/v1/gestion-maritima/operaciones/{id}/certificaciones/{cert_id}
pub async fn unlink(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path((operation_id, certification_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = CertificationRepo::unlink(&state.pool, operation_id, certification_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "OperationCertification",
            id: certification_id,
        }))
    }
}

async fn find_certification(state: &AppState, id: DbId) -> AppResult<Certification> {
    CertificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Certification",
            id,
        }))
}
