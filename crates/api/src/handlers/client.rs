//! Handlers for the `/gestion-reserva/clientes` resource (shipping customers).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::client::{Client, CreateClient, UpdateClient};
use logistica_db::repositories::ClientRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{ReservationAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/gestion-reserva/clientes
///
/// 409 if another client already uses the tax id.
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    input.validate()?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/gestion-reserva/clientes
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<Client>>> {
    let clients = ClientRepo::list(&state.pool, page.into()).await?;
    Ok(Json(clients))
}

/// GET /api/v1/gestion-reserva/clientes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// PUT /api/v1/gestion-reserva/clientes/{id}
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    input.validate()?;
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// DELETE /api/v1/gestion-reserva/clientes/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<ReservationAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}
