pub mod admin;
pub mod auth;
pub mod health;
pub mod maritime;
pub mod monitoring;
pub mod port_operations;
pub mod reservations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (module guard in brackets):
///
/// ```text
/// /auth/login                                         login (public)
/// /auth/profile                                       profile [authenticated]
///
/// /gestion-maritima/embarcaciones[/{id}]              vessels [maritime, admin]
/// /gestion-maritima/operaciones[/{id}]                operations [maritime, admin]
/// /gestion-maritima/operaciones/resumen               dashboard [maritime, port-ops, admin]
/// /gestion-maritima/operaciones/{id}/estado           status transition (PUT)
/// /gestion-maritima/operaciones/{id}/certificaciones[/{cert_id}]
///                                                     attach, review, detach
/// /gestion-maritima/operaciones/{id}/condiciones[/{cond_id}]
///                                                     attach, detach
/// /gestion-maritima/certificaciones[/{id}]            certification catalogue
/// /gestion-maritima/condiciones                       condition catalogue
/// /gestion-maritima/tripulantes[/{id}]                crew members
/// /gestion-maritima/tripulantes/{id}/idiomas[/{language_id}]
///                                                     spoken languages
/// /gestion-maritima/idiomas                           languages [authenticated]
///
/// /gestion-reserva/clientes[/{id}]                    clients [reservation, admin]
/// /gestion-reserva/rutas[/{id}]                       shipping routes
/// /gestion-reserva/tarifas[/{id}]                     tariffs (?route_id)
/// /gestion-reserva/reservas[/{id}]                    reservations (?status, ?client_id)
///
/// /monitoreo/contenedores[/{id}]                      containers [monitoring, admin]
/// /monitoreo/contenedores/{id}/sensores               sensors of a container
/// /monitoreo/sensores[/{id}]                          sensors
/// /monitoreo/sensores/{id}/notificaciones             readings of a sensor
/// /monitoreo/notificaciones                           readings (?notification_type_id)
/// /monitoreo/operadores[/me]                          operators
/// /monitoreo/tipos-notificacion                       notification types [authenticated]
///
/// /operaciones-portuarias/incidentes[/{id}]           incidents [port-ops, maritime, admin]
/// /operaciones-portuarias/reportes[/{id}]             reports
/// /operaciones-portuarias/reportes/generar            report from incidents (POST)
/// /operaciones-portuarias/tipos-incidente             incident types [authenticated]
/// /operaciones-portuarias/estados-incidente           incident statuses [authenticated]
/// /operaciones-portuarias/operaciones[/{id}]          berth work [port-ops, admin]
///
/// /admin/usuarios[/{id}]                              users [admin]
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/gestion-maritima", maritime::router())
        .nest("/gestion-reserva", reservations::router())
        .nest("/monitoreo", monitoring::router())
        .nest("/operaciones-portuarias", port_operations::router())
        .nest("/admin", admin::router())
}
