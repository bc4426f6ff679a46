use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /usuarios        -> list_users
/// POST   /usuarios        -> create_user
/// GET    /usuarios/{id}   -> get_user
/// DELETE /usuarios/{id}   -> deactivate_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/usuarios", get(admin::list_users).post(admin::create_user))
        .route(
            "/usuarios/{id}",
            get(admin::get_user).delete(admin::deactivate_user),
        )
}
