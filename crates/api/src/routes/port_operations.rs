//! Route definitions for `/operaciones-portuarias`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{incident, port_operation, report};
use crate::state::AppState;

/// Routes mounted at `/operaciones-portuarias`.
///
/// ```text
/// GET    /incidentes            -> incident::list
/// POST   /incidentes            -> incident::create
/// GET    /incidentes/{id}       -> incident::get_by_id
/// PUT    /incidentes/{id}       -> incident::update
/// DELETE /incidentes/{id}       -> incident::delete
///
/// GET    /reportes              -> report::list
/// POST   /reportes              -> report::create
/// POST   /reportes/generar      -> report::generate
/// GET    /reportes/{id}         -> report::get_by_id
/// DELETE /reportes/{id}         -> report::delete
///
/// GET    /tipos-incidente       -> incident::list_types
/// GET    /estados-incidente     -> incident::list_statuses
///
/// GET    /operaciones           -> port_operation::list
/// POST   /operaciones           -> port_operation::create
/// GET    /operaciones/{id}      -> port_operation::get_by_id
/// PUT    /operaciones/{id}      -> port_operation::update
/// DELETE /operaciones/{id}      -> port_operation::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/incidentes", get(incident::list).post(incident::create))
        .route(
            "/incidentes/{id}",
            get(incident::get_by_id)
                .put(incident::update)
                .delete(incident::delete),
        )
        .route("/reportes", get(report::list).post(report::create))
        .route("/reportes/generar", post(report::generate))
        .route(
            "/reportes/{id}",
            get(report::get_by_id).delete(report::delete),
        )
        .route("/tipos-incidente", get(incident::list_types))
        .route("/estados-incidente", get(incident::list_statuses))
        .route(
            "/operaciones",
            get(port_operation::list).post(port_operation::create),
        )
        .route(
            "/operaciones/{id}",
            get(port_operation::get_by_id)
                .put(port_operation::update)
                .delete(port_operation::delete),
        )
}
