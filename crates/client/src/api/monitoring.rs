//! `/monitoreo` endpoints.
//!
//! Every request in this namespace carries a fixed [`REQUEST_TIMEOUT`].

use std::time::Duration;

use logistica_core::pagination::Page;
use logistica_core::types::DbId;

use crate::error::ClientResult;
use crate::http::{empty_on_not_found, ApiClient, PageQuery};
use crate::models::{
    Container, Lookup, NewNotification, NoFilter, Notification, NotificationFilter, Operator,
    Sensor,
};

const BASE: &str = "/monitoreo";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn timed(client: &ApiClient) -> ApiClient {
    client.with_timeout(REQUEST_TIMEOUT)
}

pub async fn list_containers(client: &ApiClient, page: PageQuery) -> ClientResult<Page<Container>> {
    timed(client)
        .get_page(&format!("{BASE}/contenedores"), page, &NoFilter {})
        .await
}

pub async fn container_sensors(client: &ApiClient, container_id: DbId) -> ClientResult<Vec<Sensor>> {
    timed(client)
        .get(&format!("{BASE}/contenedores/{container_id}/sensores"))
        .await
}

pub async fn list_sensors(client: &ApiClient, page: PageQuery) -> ClientResult<Page<Sensor>> {
    timed(client)
        .get_page(&format!("{BASE}/sensores"), page, &NoFilter {})
        .await
}

/// Readings for one sensor, newest first. A 404 reads as an empty page.
pub async fn sensor_notifications(
    client: &ApiClient,
    sensor_id: DbId,
    page: PageQuery,
) -> ClientResult<Page<Notification>> {
    let result = timed(client)
        .get_page(
            &format!("{BASE}/sensores/{sensor_id}/notificaciones"),
            page,
            &NoFilter {},
        )
        .await;
    empty_on_not_found(result, || page.empty_page())
}

pub async fn list_notifications(
    client: &ApiClient,
    page: PageQuery,
    filter: &NotificationFilter,
) -> ClientResult<Page<Notification>> {
    timed(client)
        .get_page(&format!("{BASE}/notificaciones"), page, filter)
        .await
}

pub async fn create_notification(
    client: &ApiClient,
    input: &NewNotification,
) -> ClientResult<Notification> {
    timed(client)
        .post(&format!("{BASE}/notificaciones"), input)
        .await
}

pub async fn notification_types(client: &ApiClient) -> ClientResult<Vec<Lookup>> {
    timed(client)
        .get(&format!("{BASE}/tipos-notificacion"))
        .await
}

pub async fn list_operators(client: &ApiClient, page: PageQuery) -> ClientResult<Page<Operator>> {
    timed(client)
        .get_page(&format!("{BASE}/operadores"), page, &NoFilter {})
        .await
}

/// The caller's own operator record. 404 is surfaced: the user is not an
/// operator.
pub async fn my_operator(client: &ApiClient) -> ClientResult<Operator> {
    timed(client).get(&format!("{BASE}/operadores/me")).await
}
