//! Handlers for `/monitoreo/operadores`.

use axum::extract::{Query, State};
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::pagination::{Page, PageRequest};
use logistica_db::models::user::Operator;
use logistica_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::{MonitoringAccess, RequireModule};
use crate::state::AppState;

/// GET /api/v1/monitoreo/operadores
pub async fn list(
    State(state): State<AppState>,
    _guard: RequireModule<MonitoringAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<Operator>>> {
    let operators = UserRepo::list_operators(&state.pool, page.into()).await?;
    Ok(Json(operators))
}

/// GET /api/v1/monitoreo/operadores/me
///
/// The operator record of the calling user; 404 if they are not an operator.
pub async fn me(
    State(state): State<AppState>,
    RequireModule(user, _): RequireModule<MonitoringAccess>,
) -> AppResult<Json<Operator>> {
    let operator = UserRepo::find_operator_by_user(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Operator",
            id: user.user_id,
        }))?;
    Ok(Json(operator))
}
