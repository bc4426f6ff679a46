//! Handlers for the `/operaciones-portuarias/operaciones` resource (berth
//! loading, unloading and transshipment work).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::status::PortOperationStatus;
use logistica_core::types::DbId;
use logistica_db::models::port_operation::{
    CreatePortOperation, PortOperation, UpdatePortOperation,
};
use logistica_db::repositories::PortOperationRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{PortOperationAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/operaciones-portuarias/operaciones
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<PortOperationAccess>,
    Json(input): Json<CreatePortOperation>,
) -> AppResult<(StatusCode, Json<PortOperation>)> {
    input.validate()?;
    let port_operation = PortOperationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        port_operation_id = %port_operation.id,
        berth = %port_operation.berth,
        kind = %port_operation.kind,
        "Port operation scheduled",
    );
    Ok((StatusCode::CREATED, Json(port_operation)))
}

/// GET /api/v1/operaciones-portuarias/operaciones
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<PortOperationAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<PortOperation>>> {
    let port_operations = PortOperationRepo::list(&state.pool, page.into()).await?;
    Ok(Json(port_operations))
}

/// GET /api/v1/operaciones-portuarias/operaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<PortOperationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PortOperation>> {
    let port_operation = find_port_operation(&state, id).await?;
    Ok(Json(port_operation))
}

/// PUT /api/v1/operaciones-portuarias/operaciones/{id}
///
/// Finished or cancelled work can no longer be edited. Moving to
/// `completed` stamps `completed_at`.
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<PortOperationAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePortOperation>,
) -> AppResult<Json<PortOperation>> {
    input.validate()?;
    let current = find_port_operation(&state, id).await?;
    if matches!(
        current.status,
        PortOperationStatus::Completed | PortOperationStatus::Cancelled
    ) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Port operation {} is already {}",
            current.code, current.status
        ))));
    }

    let port_operation = PortOperationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PortOperation",
            id,
        }))?;
    if port_operation.status != current.status {
        tracing::info!(
            port_operation_id = %id,
            from = %current.status,
            to = %port_operation.status,
            "Port operation status changed",
        );
    }
    Ok(Json(port_operation))
}

/// DELETE /api/v1/operaciones-portuarias/operaciones/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<PortOperationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PortOperationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PortOperation",
            id,
        }))
    }
}

async fn find_port_operation(state: &AppState, id: DbId) -> AppResult<PortOperation> {
    PortOperationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PortOperation",
            id,
        }))
}
