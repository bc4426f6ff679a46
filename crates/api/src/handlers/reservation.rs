//! Handlers for the `/gestion-reserva/reservas` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::reservation::{
    CreateReservation, Reservation, ReservationFilter, UpdateReservation,
};
use logistica_db::repositories::{ReservationRepo, TariffRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{RequireModule, ReservationAccess};
use crate::state::AppState;

/// POST /api/v1/gestion-reserva/reservas
///
/// New reservations start `pending`. A tariff, when given, must belong to the
/// reserved route.
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Json(input): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    input.validate()?;
    if let Some(tariff_id) = input.tariff_id {
        ensure_tariff_on_route(&state, tariff_id, input.route_id).await?;
    }
    let reservation = ReservationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        reservation_id = %reservation.id,
        client_id = %reservation.client_id,
        "Reservation created",
    );
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/v1/gestion-reserva/reservas
///
/// Optional `status` and `client_id` filters.
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Query(page): Query<PageRequest>,
    Query(filter): Query<ReservationFilter>,
) -> AppResult<Json<Page<Reservation>>> {
    let reservations = ReservationRepo::list(&state.pool, &filter, page.into()).await?;
    Ok(Json(reservations))
}

/// GET /api/v1/gestion-reserva/reservas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = find_reservation(&state, id).await?;
    Ok(Json(reservation))
}

/// PUT /api/v1/gestion-reserva/reservas/{id}
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservation>,
) -> AppResult<Json<Reservation>> {
    input.validate()?;
    if let Some(tariff_id) = input.tariff_id {
        let current = find_reservation(&state, id).await?;
        ensure_tariff_on_route(&state, tariff_id, current.route_id).await?;
    }
    let reservation = ReservationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;
    Ok(Json(reservation))
}

/// DELETE /api/v1/gestion-reserva/reservas/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReservationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))
    }
}

async fn find_reservation(state: &AppState, id: DbId) -> AppResult<Reservation> {
    ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))
}

async fn ensure_tariff_on_route(state: &AppState, tariff_id: DbId, route_id: DbId) -> AppResult<()> {
    let tariff = TariffRepo::find_by_id(&state.pool, tariff_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Tariff {tariff_id} does not exist")))?;
    if tariff.route_id != route_id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Tariff {} does not apply to route {route_id}",
            tariff.code
        ))));
    }
    Ok(())
}
