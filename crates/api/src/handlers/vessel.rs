//! Handlers for the `/gestion-maritima/embarcaciones` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::vessel::{CreateVessel, UpdateVessel, Vessel};
use logistica_db::repositories::VesselRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{MaritimeAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/gestion-maritima/embarcaciones
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Json(input): Json<CreateVessel>,
) -> AppResult<(StatusCode, Json<Vessel>)> {
    input.validate()?;
    let vessel = VesselRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(vessel)))
}

/// GET /api/v1/gestion-maritima/embarcaciones
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<Vessel>>> {
    let vessels = VesselRepo::list(&state.pool, page.into()).await?;
    Ok(Json(vessels))
}

/// GET /api/v1/gestion-maritima/embarcaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vessel>> {
    let vessel = VesselRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vessel",
            id,
        }))?;
    Ok(Json(vessel))
}

/// PUT /api/v1/gestion-maritima/embarcaciones/{id}
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVessel>,
) -> AppResult<Json<Vessel>> {
    input.validate()?;
    let vessel = VesselRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vessel",
            id,
        }))?;
    Ok(Json(vessel))
}

/// DELETE /api/v1/gestion-maritima/embarcaciones/{id}
///
/// Fails with 400 while operations still reference the vessel.
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VesselRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vessel",
            id,
        }))
    }
}
