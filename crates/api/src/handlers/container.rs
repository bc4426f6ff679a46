//! Handlers for the `/monitoreo/contenedores` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::container::{Container, CreateContainer, UpdateContainer};
use logistica_db::models::sensor::Sensor;
use logistica_db::repositories::{ContainerRepo, SensorRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{MonitoringAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/monitoreo/contenedores
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Json(input): Json<CreateContainer>,
) -> AppResult<(StatusCode, Json<Container>)> {
    input.validate()?;
    let container = ContainerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(container)))
}

/// GET /api/v1/monitoreo/contenedores
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<Container>>> {
    let containers = ContainerRepo::list(&state.pool, page.into()).await?;
    Ok(Json(containers))
}

/// GET /api/v1/monitoreo/contenedores/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Container>> {
    let container = ContainerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Container",
            id,
        }))?;
    Ok(Json(container))
}

/// PUT /api/v1/monitoreo/contenedores/{id}
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContainer>,
) -> AppResult<Json<Container>> {
    input.validate()?;
    let container = ContainerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Container",
            id,
        }))?;
    Ok(Json(container))
}

/// DELETE /api/v1/monitoreo/contenedores/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ContainerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Container",
            id,
        }))
    }
}

/// GET /api/v1/monitoreo/contenedores/{id}/sensores
///
/// Sensors mounted on a container.
pub async fn list_sensors(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Sensor>>> {
    if ContainerRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Container",
            id,
        }));
    }
    let sensors = SensorRepo::list_by_container(&state.pool, id).await?;
    Ok(Json(sensors))
}
