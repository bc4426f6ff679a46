//! Route definitions for `/gestion-reserva`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{client, reservation, shipping_route, tariff};
use crate::state::AppState;

/// Routes mounted at `/gestion-reserva`.
///
/// ```text
/// GET, POST          /clientes        GET, PUT, DELETE /clientes/{id}
/// GET, POST          /rutas           GET, PUT, DELETE /rutas/{id}
/// GET, POST          /tarifas         GET, PUT, DELETE /tarifas/{id}
/// GET, POST          /reservas        GET, PUT, DELETE /reservas/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clientes", get(client::list).post(client::create))
        .route(
            "/clientes/{id}",
            get(client::get_by_id)
                .put(client::update)
                .delete(client::delete),
        )
        .route(
            "/rutas",
            get(shipping_route::list).post(shipping_route::create),
        )
        .route(
            "/rutas/{id}",
            get(shipping_route::get_by_id)
                .put(shipping_route::update)
                .delete(shipping_route::delete),
        )
        .route("/tarifas", get(tariff::list).post(tariff::create))
        .route(
            "/tarifas/{id}",
            get(tariff::get_by_id)
                .put(tariff::update)
                .delete(tariff::delete),
        )
        .route("/reservas", get(reservation::list).post(reservation::create))
        .route(
            "/reservas/{id}",
            get(reservation::get_by_id)
                .put(reservation::update)
                .delete(reservation::delete),
        )
}
