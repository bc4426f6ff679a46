//! Handlers for `/operaciones-portuarias/reportes`.
//!
//! Reports are either written directly or generated from a selection of an
//! operation's incidents via [`generate`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::report::{CreateReport, GenerateReport, Report, ReportWithIncidents};
use logistica_db::repositories::ReportRepo;
use validator::Validate;

use super::operation::find_operation;
use crate::error::{AppError, AppResult};
use crate::middleware::guard::{IncidentAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/operaciones-portuarias/reportes
///
/// A code is generated when none is supplied.
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<IncidentAccess>,
    Json(input): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<Report>)> {
    input.validate()?;
    if let Some(operation_id) = input.operation_id {
        find_operation(&state, operation_id).await?;
    }
    let report = ReportRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// POST /api/v1/operaciones-portuarias/reportes/generar
///
/// Create a report linked to the selected incidents of one operation. An
/// empty selection is allowed. Incidents from another operation give 400.
pub async fn generate(
    State(state): State<AppState>,
    RequireModule(user, _): RequireModule<IncidentAccess>,
    Json(input): Json<GenerateReport>,
) -> AppResult<(StatusCode, Json<ReportWithIncidents>)> {
    input.validate()?;
    find_operation(&state, input.operation_id).await?;

    let report = ReportRepo::generate(&state.pool, &input).await?;
    tracing::info!(
        report_id = %report.report.id,
        code = %report.report.code,
        user_id = %user.user_id,
        "Report generated from incident selection",
    );
    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/v1/operaciones-portuarias/reportes
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<IncidentAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<Report>>> {
    let reports = ReportRepo::list(&state.pool, page.into()).await?;
    Ok(Json(reports))
}

/// GET /api/v1/operaciones-portuarias/reportes/{id}
///
/// Includes the ids of linked incidents.
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<IncidentAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReportWithIncidents>> {
    let report = ReportRepo::find_with_incidents(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;
    Ok(Json(report))
}

/// DELETE /api/v1/operaciones-portuarias/reportes/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<IncidentAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReportRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))
    }
}
