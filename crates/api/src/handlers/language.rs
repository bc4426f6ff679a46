//! Handler for the shared language catalogue.

use axum::extract::State;
use axum::Json;
use logistica_db::models::language::Language;
use logistica_db::repositories::LanguageRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/gestion-maritima/idiomas
///
/// Any authenticated user may read the catalogue.
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Language>>> {
    let languages = LanguageRepo::list(&state.pool).await?;
    Ok(Json(languages))
}
