//! Handlers for sensor notifications and their type catalogue.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::pagination::{Page, PageRequest};
use logistica_db::models::notification::{
    CreateNotification, Notification, NotificationFilter, NotificationType,
};
use logistica_db::repositories::{NotificationRepo, SensorRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::guard::{MonitoringAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/monitoreo/notificaciones
///
/// Record a reading. Inactive sensors do not accept new readings.
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Json(input): Json<CreateNotification>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    let sensor = SensorRepo::find_by_id(&state.pool, input.sensor_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Sensor {} does not exist", input.sensor_id)))?;
    if !sensor.is_active {
        return Err(AppError::BadRequest(format!(
            "Sensor {} is inactive",
            sensor.code
        )));
    }

    let notification = NotificationRepo::create(&state.pool, &input).await?;
    tracing::debug!(
        sensor_id = %notification.sensor_id,
        notification_type = %notification.notification_type,
        value = notification.value,
        "Notification recorded",
    );
    Ok((StatusCode::CREATED, Json(notification)))
}

/// GET /api/v1/monitoreo/notificaciones
///
/// Optional `notification_type_id` filter.
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Query(page): Query<PageRequest>,
    Query(filter): Query<NotificationFilter>,
) -> AppResult<Json<Page<Notification>>> {
    let notifications = NotificationRepo::list(&state.pool, &filter, page.into()).await?;
    Ok(Json(notifications))
}

/// GET /api/v1/monitoreo/tipos-notificacion
pub async fn list_types(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<NotificationType>>> {
    let types = NotificationRepo::list_types(&state.pool).await?;
    Ok(Json(types))
}
