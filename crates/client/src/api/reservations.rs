//! `/gestion-reserva` endpoints.

use logistica_core::pagination::Page;
use logistica_core::types::DbId;

use crate::error::ClientResult;
use crate::http::{ApiClient, PageQuery};
use crate::models::{
    Client, NewClient, NewReservation, NewShippingRoute, NewTariff, NoFilter, Reservation,
    ReservationChanges, ReservationFilter, ShippingRoute, Tariff, TariffFilter,
};

const BASE: &str = "/gestion-reserva";

pub async fn list_clients(client: &ApiClient, page: PageQuery) -> ClientResult<Page<Client>> {
    client
        .get_page(&format!("{BASE}/clientes"), page, &NoFilter {})
        .await
}

pub async fn create_client(client: &ApiClient, input: &NewClient) -> ClientResult<Client> {
    client.post(&format!("{BASE}/clientes"), input).await
}

pub async fn list_routes(client: &ApiClient, page: PageQuery) -> ClientResult<Page<ShippingRoute>> {
    client
        .get_page(&format!("{BASE}/rutas"), page, &NoFilter {})
        .await
}

pub async fn create_route(
    client: &ApiClient,
    input: &NewShippingRoute,
) -> ClientResult<ShippingRoute> {
    client.post(&format!("{BASE}/rutas"), input).await
}

pub async fn list_tariffs(
    client: &ApiClient,
    page: PageQuery,
    filter: &TariffFilter,
) -> ClientResult<Page<Tariff>> {
    client
        .get_page(&format!("{BASE}/tarifas"), page, filter)
        .await
}

pub async fn create_tariff(client: &ApiClient, input: &NewTariff) -> ClientResult<Tariff> {
    client.post(&format!("{BASE}/tarifas"), input).await
}

pub async fn list_reservations(
    client: &ApiClient,
    page: PageQuery,
    filter: &ReservationFilter,
) -> ClientResult<Page<Reservation>> {
    client
        .get_page(&format!("{BASE}/reservas"), page, filter)
        .await
}

pub async fn get_reservation(client: &ApiClient, id: DbId) -> ClientResult<Reservation> {
    client.get(&format!("{BASE}/reservas/{id}")).await
}

pub async fn create_reservation(
    client: &ApiClient,
    input: &NewReservation,
) -> ClientResult<Reservation> {
    client.post(&format!("{BASE}/reservas"), input).await
}

pub async fn update_reservation(
    client: &ApiClient,
    id: DbId,
    changes: &ReservationChanges,
) -> ClientResult<Reservation> {
    client.put(&format!("{BASE}/reservas/{id}"), changes).await
}

pub async fn delete_reservation(client: &ApiClient, id: DbId) -> ClientResult<()> {
    client.delete(&format!("{BASE}/reservas/{id}")).await
}
