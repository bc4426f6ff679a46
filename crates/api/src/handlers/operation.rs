//! Handlers for the `/gestion-maritima/operaciones` resource.
//!
//! Status changes go through [`transition`], which enforces the lifecycle
//! rules in [`OperationStatus::transition`]. The plain update endpoint never
//! touches the status.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::status::OperationStatus;
use logistica_core::types::DbId;
use logistica_core::validation::{require_full_progress, MIN_PROGRESS};
use logistica_db::models::operation::{
    CreateOperation, Operation, OperationFilter, OperationSummary, TransitionOperation,
    UpdateOperation,
};
use logistica_db::repositories::OperationRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{DashboardAccess, MaritimeAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/gestion-maritima/operaciones
///
/// New operations start as `registered` unless the caller picks a status.
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Json(input): Json<CreateOperation>,
) -> AppResult<(StatusCode, Json<Operation>)> {
    input.validate()?;
    if input.status == Some(OperationStatus::Completed) {
        require_full_progress(input.progress.unwrap_or(MIN_PROGRESS))?;
    }
    let operation = OperationRepo::create(&state.pool, &input).await?;
    tracing::info!(operation_id = %operation.id, code = %operation.code, "Operation created");
    Ok((StatusCode::CREATED, Json(operation)))
}

/// GET /api/v1/gestion-maritima/operaciones
///
/// Optional `status` and `vessel_id` filters.
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Query(page): Query<PageRequest>,
    Query(filter): Query<OperationFilter>,
) -> AppResult<Json<Page<Operation>>> {
    let operations = OperationRepo::list(&state.pool, &filter, page.into()).await?;
    Ok(Json(operations))
}

/// GET /api/v1/gestion-maritima/operaciones/resumen
pub async fn summary(
    State(state): State<AppState>,
    _guard: RequireModule<DashboardAccess>,
) -> AppResult<Json<OperationSummary>> {
    let summary = OperationRepo::summary(&state.pool).await?;
    Ok(Json(summary))
}

/// GET /api/v1/gestion-maritima/operaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Operation>> {
    let operation = find_operation(&state, id).await?;
    Ok(Json(operation))
}

/// PUT /api/v1/gestion-maritima/operaciones/{id}
///
/// Completed and cancelled operations are read-only.
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOperation>,
) -> AppResult<Json<Operation>> {
    input.validate()?;
    let current = find_operation(&state, id).await?;
    if current.status.is_terminal() {
        return Err(finished(&current));
    }

    match OperationRepo::update(&state.pool, id, &input).await? {
        Some(operation) => Ok(Json(operation)),
        // Finished or deleted since it was read.
        None => Err(finished(&find_operation(&state, id).await?)),
    }
}

/// PUT /api/v1/gestion-maritima/operaciones/{id}/estado
///
/// Move an operation to a new status. Rejects moves outside the lifecycle
/// table with 400.
pub async fn transition(
    State(state): State<AppState>,
    RequireModule(user, _): RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<TransitionOperation>,
) -> AppResult<Json<Operation>> {
    let current = find_operation(&state, id).await?;
    let next = current.status.transition(input.status)?;

    let operation = OperationRepo::set_status(&state.pool, id, next)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Operation",
            id,
        }))?;

    tracing::info!(
        operation_id = %id,
        from = %current.status,
        to = %next,
        user_id = %user.user_id,
        "Operation transitioned",
    );
    Ok(Json(operation))
}

/// DELETE /api/v1/gestion-maritima/operaciones/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OperationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Operation",
            id,
        }))
    }
}

fn finished(operation: &Operation) -> AppError {
    AppError::Core(CoreError::Validation(format!(
        "Operation {} is already {} and can no longer be edited",
        operation.code, operation.status
    )))
}

/// Load an operation or fail with 404.
pub(crate) async fn find_operation(state: &AppState, id: DbId) -> AppResult<Operation> {
    OperationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Operation",
            id,
        }))
}
