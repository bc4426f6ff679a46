//! Handlers for `/gestion-maritima/tripulantes` and the languages each crew
//! member speaks.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::crew::{
    AddCrewLanguage, CreateCrewMember, CrewMember, CrewMemberLanguage, UpdateCrewMember,
};
use logistica_db::repositories::CrewRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{MaritimeAccess, RequireModule};
use crate::state::AppState;

/// POST /api/v1/gestion-maritima/tripulantes
pub async fn create(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Json(input): Json<CreateCrewMember>,
) -> AppResult<(StatusCode, Json<CrewMember>)> {
    input.validate()?;
    let member = CrewRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/gestion-maritima/tripulantes
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<CrewMember>>> {
    let members = CrewRepo::list(&state.pool, page.into()).await?;
    Ok(Json(members))
}

/// GET /api/v1/gestion-maritima/tripulantes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CrewMember>> {
    let member = find_member(&state, id).await?;
    Ok(Json(member))
}

/// PUT /api/v1/gestion-maritima/tripulantes/{id}
pub async fn update(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCrewMember>,
) -> AppResult<Json<CrewMember>> {
    input.validate()?;
    let member = CrewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CrewMember",
            id,
        }))?;
    Ok(Json(member))
}

/// DELETE /api/v1/gestion-maritima/tripulantes/{id}
pub async fn delete(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CrewRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CrewMember",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

/// GET /api/v1/gestion-maritima/tripulantes/{id}/idiomas
pub async fn list_languages(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<CrewMemberLanguage>>> {
    find_member(&state, id).await?;
    let languages = CrewRepo::list_languages(&state.pool, id).await?;
    Ok(Json(languages))
}

/// POST /api/v1/gestion-maritima/tripulantes/{id}/idiomas
///
/// 409 if the language is already recorded for this crew member.
pub async fn add_language(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path(id): Path<DbId>,
    Json(input): Json<AddCrewLanguage>,
) -> AppResult<(StatusCode, Json<CrewMemberLanguage>)> {
    input.validate()?;
    find_member(&state, id).await?;
    let language = CrewRepo::add_language(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(language)))
}

/// DELETE /api/v1/gestion-maritima/tripulantes/{id}/idiomas/{language_id}
pub async fn remove_language(
    State(state): State<AppState>,
    _guard: RequireModule<MaritimeAccess>,
    Path((id, language_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = CrewRepo::remove_language(&state.pool, id, language_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CrewMemberLanguage",
            id: language_id,
        }))
    }
}

async fn find_member(state: &AppState, id: DbId) -> AppResult<CrewMember> {
    CrewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CrewMember",
            id,
        }))
}
