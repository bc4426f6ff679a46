//! Handlers for the `/monitoreo/sensores` resource and the readings each
//! sensor reports.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::notification::Notification;
use logistica_db::models::sensor::{CreateSensor, Sensor, UpdateSensor};
use logistica_db::repositories::{NotificationRepo, SensorRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{MonitoringAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/monitoreo/sensores
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Json(input): Json<CreateSensor>,
) -> AppResult<(StatusCode, Json<Sensor>)> {
    input.validate()?;
    let sensor = SensorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(sensor)))
}

/// GET /api/v1/monitoreo/sensores
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<Sensor>>> {
    let sensors = SensorRepo::list(&state.pool, page.into()).await?;
    Ok(Json(sensors))
}

/// GET /api/v1/monitoreo/sensores/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Sensor>> {
    let sensor = find_sensor(&state, id).await?;
    Ok(Json(sensor))
}

/// PUT /api/v1/monitoreo/sensores/{id}
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSensor>,
) -> AppResult<Json<Sensor>> {
    input.validate()?;
    let sensor = SensorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))?;
    Ok(Json(sensor))
}

/// DELETE /api/v1/monitoreo/sensores/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SensorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))
    }
}

/// GET /api/v1/monitoreo/sensores/{id}/notificaciones
///
/// Readings for one sensor, newest first. 404 when the sensor does not exist.
pub async fn list_notifications(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Path(id): Path<DbId>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<Notification>>> {
    find_sensor(&state, id).await?;
    let notifications = NotificationRepo::list_for_sensor(&state.pool, id, page.into()).await?;
    Ok(Json(notifications))
}

async fn find_sensor(state: &AppState, id: DbId) -> AppResult<Sensor> {
    SensorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))
}
