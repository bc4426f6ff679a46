//! Handlers for operating conditions and their attachment to operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::types::DbId;
use logistica_db::models::operating_condition::{
    CreateOperatingCondition, LinkCondition, OperatingCondition, OperationCondition,
};
use logistica_db::repositories::OperatingConditionRepo;
use validator::Validate;

use super::operation::find_operation;
use crate::error::{AppError, AppResult};
use crate::middleware::guard::{MaritimeAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/gestion-maritima/condiciones
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Json(input): Json<CreateOperatingCondition>,
) -> AppResult<(StatusCode, Json<OperatingCondition>)> {
    input.validate()?;
    let condition = OperatingConditionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(condition)))
}

/// GET /api/v1/gestion-maritima/condiciones
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
) -> AppResult<Json<Vec<OperatingCondition>>> {
    let conditions = OperatingConditionRepo::list(&state.pool).await?;
    Ok(Json(conditions))
}

/// GET /api/v1/gestion-maritima/operaciones/{id}/condiciones
pub async fn list_for_operation(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(operation_id): Path<DbId>,
) -> AppResult<Json<Vec<OperationCondition>>> {
    find_operation(&state, operation_id).await?;
    let conditions = OperatingConditionRepo::list_for_operation(&state.pool, operation_id).await?;
    Ok(Json(conditions))
}

/// POST /api/v1/gestion-maritima/operaciones/{id}/condiciones
///
/// 409 if the condition is already attached; 400 if it does not exist.
pub async fn link(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(operation_id): Path<DbId>,
    Json(input): Json<LinkCondition>,
) -> AppResult<(StatusCode, Json<OperationCondition>)> {
    find_operation(&state, operation_id).await?;
    let condition = OperatingConditionRepo::link(&state.pool, operation_id, &input).await?;
    Ok((StatusCode::CREATED, Json(condition)))
}

/// DELETE /api/v1/gestion-maritima/operaciones/{id}/condiciones/{cond_id}
pub async fn unlink(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path((operation_id, condition_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = OperatingConditionRepo::unlink(&state.pool, operation_id, condition_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "OperationCondition",
            id: condition_id,
        }))
    }
}
