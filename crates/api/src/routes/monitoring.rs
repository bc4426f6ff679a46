//! Route definitions for `/monitoreo`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{container, notification, operator, sensor};
use crate::state::AppState;

/// Routes mounted at `/monitoreo`.
///
/// ```text
/// GET    /contenedores                   -> container::list
/// POST   /contenedores                   -> container::create
/// GET    /contenedores/{id}              -> container::get_by_id
/// PUT    /contenedores/{id}              -> container::update
/// DELETE /contenedores/{id}              -> container::delete
/// GET    /contenedores/{id}/sensores     -> container::list_sensors
///
/// GET    /sensores                       -> sensor::list
/// POST   /sensores                       -> sensor::create
/// GET    /sensores/{id}                  -> sensor::get_by_id
/// PUT    /sensores/{id}                  -> sensor::update
/// DELETE /sensores/{id}                  -> sensor::delete
/// GET    /sensores/{id}/notificaciones   -> sensor::list_notifications
///
/// GET    /notificaciones                 -> notification::list
/// POST   /notificaciones                 -> notification::create
/// GET    /tipos-notificacion             -> notification::list_types
///
/// GET    /operadores                     -> operator::list
/// GET    /operadores/me                  -> operator::me
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contenedores", get(container::list).post(container::create))
        .route(
            "/contenedores/{id}",
            get(container::get_by_id)
                .put(container::update)
                .delete(container::delete),
        )
        .route("/contenedores/{id}/sensores", get(container::list_sensors))
        .route("/sensores", get(sensor::list).post(sensor::create))
        .route(
            "/sensores/{id}",
            get(sensor::get_by_id)
                .put(sensor::update)
                .delete(sensor::delete),
        )
        .route(
            "/sensores/{id}/notificaciones",
            get(sensor::list_notifications),
        )
        .route(
            "/notificaciones",
            get(notification::list).post(notification::create),
        )
        .route("/tipos-notificacion", get(notification::list_types))
        .route("/operadores", get(operator::list))
        .route("/operadores/me", get(operator::me))
}
