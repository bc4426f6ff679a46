//! Handlers for the `/gestion-reserva/tarifas` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::tariff::{CreateTariff, Tariff, TariffFilter, UpdateTariff};
use logistica_db::repositories::TariffRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{RequireModule, ReservationAccess};
use crate::state::AppState;

/// POST /api/v1/gestion-reserva/tarifas
///
/// `currency` defaults to USD.
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Json(input): Json<CreateTariff>,
) -> AppResult<(StatusCode, Json<Tariff>)> {
    input.validate()?;
    let tariff = TariffRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tariff)))
}

/// GET /api/v1/gestion-reserva/tarifas
///
/// Ordered by code; optional `route_id` filter.
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Query(page): Query<PageRequest>,
    Query(filter): Query<TariffFilter>,
) -> AppResult<Json<Page<Tariff>>> {
    let tariffs = TariffRepo::list(&state.pool, &filter, page.into()).await?;
    Ok(Json(tariffs))
}

/// GET /api/v1/gestion-reserva/tarifas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Tariff>> {
    let tariff = TariffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tariff",
            id,
        }))?;
    Ok(Json(tariff))
}

/// PUT /api/v1/gestion-reserva/tarifas/{id}
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTariff>,
) -> AppResult<Json<Tariff>> {
    input.validate()?;
    let tariff = TariffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tariff",
            id,
        }))?;
    Ok(Json(tariff))
}

/// DELETE /api/v1/gestion-reserva/tarifas/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TariffRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Tariff",
            id,
        }))
    }
}
