//! Route definitions for `/gestion-maritima`.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{certification, crew, language, operating_condition, operation, vessel};
use crate::state::AppState;

/// Routes mounted at `/gestion-maritima`.
///
/// ```text
/// GET    /embarcaciones                              -> vessel::list
/// POST   /embarcaciones                              -> vessel::create
/// GET    /embarcaciones/{id}                         -> vessel::get_by_id
/// PUT    /embarcaciones/{id}                         -> vessel::update
/// DELETE /embarcaciones/{id}                         -> vessel::delete
///
/// GET    /operaciones                                -> operation::list
/// POST   /operaciones                                -> operation::create
/// GET    /operaciones/resumen                        -> operation::summary
/// GET    /operaciones/{id}                           -> operation::get_by_id
/// PUT    /operaciones/{id}                           -> operation::update
/// DELETE /operaciones/{id}                           -> operation::delete
/// PUT    /operaciones/{id}/estado                    -> operation::transition
/// GET    /operaciones/{id}/certificaciones           -> certification::list_for_operation
/// POST   /operaciones/{id}/certificaciones           -> certification::link
/// PUT    /operaciones/{id}/certificaciones/{cert_id} -> certification::review
/// DELETE /operaciones/{id}/certificaciones/{cert_id} -> certification::unlink
/// GET    /operaciones/{id}/condiciones               -> operating_condition::list_for_operation
/// POST   /operaciones/{id}/condiciones               -> operating_condition::link
/// DELETE /operaciones/{id}/condiciones/{cond_id}     -> operating_condition::unlink
///
/// GET    /certificaciones                            -> certification::list
/// POST   /certificaciones                            -> certification::create
/// GET    /certificaciones/{id}                       -> certification::get_by_id
/// PUT    /certificaciones/{id}                       -> certification::update
/// DELETE /certificaciones/{id}                       -> certification::delete
///
/// GET    /condiciones                                -> operating_condition::list
/// POST   /condiciones                                -> operating_condition::create
///
/// GET    /tripulantes                                -> crew::list
/// POST   /tripulantes                                -> crew::create
/// GET    /tripulantes/{id}                           -> crew::get_by_id
/// PUT    /tripulantes/{id}                           -> crew::update
/// DELETE /tripulantes/{id}                           -> crew::delete
/// GET    /tripulantes/{id}/idiomas                   -> crew::list_languages
/// POST   /tripulantes/{id}/idiomas                   -> crew::add_language
/// DELETE /tripulantes/{id}/idiomas/{language_id}     -> crew::remove_language
///
/// GET    /idiomas                                    -> language::list
/// ```
pub fn router() -> Router<AppState> {
    let vessel_routes = Router::new()
        .route("/", get(vessel::list).post(vessel::create))
        .route(
            "/{id}",
            get(vessel::get_by_id)
                .put(vessel::update)
                .delete(vessel::delete),
        );

    let operation_routes = Router::new()
        .route("/", get(operation::list).post(operation::create))
        .route("/resumen", get(operation::summary))
        .route(
            "/{id}",
            get(operation::get_by_id)
                .put(operation::update)
                .delete(operation::delete),
        )
        .route("/{id}/estado", put(operation::transition))
        .route(
            "/{id}/certificaciones",
            get(certification::list_for_operation).post(certification::link),
        )
        .route(
            "/{id}/certificaciones/{cert_id}",
            put(certification::review).delete(certification::unlink),
        )
        .route(
            "/{id}/condiciones",
            get(operating_condition::list_for_operation).post(operating_condition::link),
        )
        .route(
            "/{id}/condiciones/{cond_id}",
            delete(operating_condition::unlink),
        );

    let certification_routes = Router::new()
        .route("/", get(certification::list).post(certification::create))
        .route(
            "/{id}",
            get(certification::get_by_id)
                .put(certification::update)
                .delete(certification::delete),
        );

    let crew_routes = Router::new()
        .route("/", get(crew::list).post(crew::create))
        .route(
            "/{id}",
            get(crew::get_by_id).put(crew::update).delete(crew::delete),
        )
        .route(
            "/{id}/idiomas",
            get(crew::list_languages).post(crew::add_language),
        )
        .route(
            "/{id}/idiomas/{language_id}",
            delete(crew::remove_language),
        );

    Router::new()
        .nest("/embarcaciones", vessel_routes)
        .nest("/operaciones", operation_routes)
        .nest("/certificaciones", certification_routes)
        .route(
            "/condiciones",
            get(operating_condition::list).post(operating_condition::create),
        )
        .nest("/tripulantes", crew_routes)
        .route("/idiomas", get(language::list))
}
