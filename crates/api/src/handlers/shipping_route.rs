//! Handlers for the `/gestion-reserva/rutas` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::shipping_route::{CreateShippingRoute, ShippingRoute, UpdateShippingRoute};
use logistica_db::repositories::ShippingRouteRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{ReservationAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/gestion-reserva/rutas
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Json(input): Json<CreateShippingRoute>,
) -> AppResult<(StatusCode, Json<ShippingRoute>)> {
    input.validate()?;
    let route = ShippingRouteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

/// GET /api/v1/gestion-reserva/rutas
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<ShippingRoute>>> {
    let routes = ShippingRouteRepo::list(&state.pool, page.into()).await?;
    Ok(Json(routes))
}

/// GET /api/v1/gestion-reserva/rutas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShippingRoute>> {
    let route = ShippingRouteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShippingRoute",
            id,
        }))?;
    Ok(Json(route))
}

/// PUT /api/v1/gestion-reserva/rutas/{id}
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShippingRoute>,
) -> AppResult<Json<ShippingRoute>> {
    input.validate()?;
    let route = ShippingRouteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShippingRoute",
            id,
        }))?;
    Ok(Json(route))
}

/// DELETE /api/v1/gestion-reserva/rutas/{id}
///
/// Fails with 400 while tariffs or reservations still reference the route.
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShippingRouteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ShippingRoute",
            id,
        }))
    }
}
