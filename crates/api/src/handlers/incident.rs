//! Handlers for `/operaciones-portuarias/incidentes` and the incident lookup
//! catalogues.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_core::validation::require_non_blank;
use logistica_db::models::incident::{
    CreateIncident, Incident, IncidentFilter, IncidentLookup, UpdateIncident,
};
use logistica_db::repositories::IncidentRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::guard::{IncidentAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/operaciones-portuarias/incidentes
///
/// Without an explicit status the incident is recorded as `open`.
pub async fn create(
    State(state): State<AppState>,
    RequireModule(user, _): RequireModule<IncidentAccess>,
    Json(input): Json<CreateIncident>,
) -> AppResult<(StatusCode, Json<Incident>)> {
    input.validate()?;
    require_non_blank("description", &input.description)?;
    let incident = IncidentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        incident_id = %incident.id,
        operation_id = %incident.operation_id,
        severity = incident.severity,
        user_id = %user.user_id,
        "Incident recorded",
    );
    Ok((StatusCode::CREATED, Json(incident)))
}

/// GET /api/v1/operaciones-portuarias/incidentes
///
/// Optional `operation_id` filter, used by the report form to offer an
/// operation's incidents.
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<IncidentAccess>,
    Query(page): Query<PageRequest>,
    Query(filter): Query<IncidentFilter>,
) -> AppResult<Json<Page<Incident>>> {
    let incidents = IncidentRepo::list(&state.pool, &filter, page.into()).await?;
    Ok(Json(incidents))
}

/// GET /api/v1/operaciones-portuarias/incidentes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<IncidentAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Incident>> {
    let incident = IncidentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id,
        }))?;
    Ok(Json(incident))
}

/// PUT /api/v1/operaciones-portuarias/incidentes/{id}
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<IncidentAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIncident>,
) -> AppResult<Json<Incident>> {
    input.validate()?;
    if let Some(description) = &input.description {
        require_non_blank("description", description)?;
    }
    let incident = IncidentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id,
        }))?;
    Ok(Json(incident))
}

/// DELETE /api/v1/operaciones-portuarias/incidentes/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<IncidentAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = IncidentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id,
        }))
    }
}

/// GET /api/v1/operaciones-portuarias/tipos-incidente
pub async fn list_types(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<IncidentLookup>>> {
    Ok(Json(IncidentRepo::list_types(&state.pool).await?))
}

/// GET /api/v1/operaciones-portuarias/estados-incidente
pub async fn list_statuses(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<IncidentLookup>>> {
    Ok(Json(IncidentRepo::list_statuses(&state.pool).await?))
}
