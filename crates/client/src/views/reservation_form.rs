//! New-reservation form.

use chrono::NaiveDate;
use logistica_core::pagination::{Page, MAX_PAGE_LIMIT};
use logistica_core::types::DbId;

use super::forms::{FormOutcome, RequiredFields};
use crate::api::reservations;
use crate::error::ClientResult;
use crate::http::{ApiClient, PageQuery};
use crate::models::{Client, NewReservation, ShippingRoute};

/// User input, as entered.
#[derive(Debug, Clone, Default)]
pub struct ReservationDraft {
    pub code: String,
    pub client_id: Option<DbId>,
    pub route_id: Option<DbId>,
    pub tariff_id: Option<DbId>,
    pub container_count: Option<i32>,
    pub reserved_for: Option<NaiveDate>,
    pub notes: String,
}

/// Form state: option lists for the selects plus the draft.
#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
    pub clients: Vec<Client>,
    pub routes: Vec<ShippingRoute>,
    pub draft: ReservationDraft,
}

impl ReservationForm {
    /// Fetch clients and routes concurrently. A failed list is logged and
    /// left empty so the rest of the form still works.
    pub async fn load(client: &ApiClient) -> Self {
        let page = PageQuery::new(1, MAX_PAGE_LIMIT);
        let (clients, routes) = tokio::join!(
            reservations::list_clients(client, page),
            reservations::list_routes(client, page),
        );

        Self {
            clients: rows_or_empty("clients", clients),
            routes: rows_or_empty("routes", routes),
            draft: ReservationDraft::default(),
        }
    }

    /// Check required fields and build the request body.
    pub fn build(&self) -> Result<NewReservation, String> {
        let d = &self.draft;
        RequiredFields::new()
            .text("code", &d.code)
            .present("client", &d.client_id)
            .present("route", &d.route_id)
            .present("containers", &d.container_count)
            .present("date", &d.reserved_for)
            .check()?;

        match (d.client_id, d.route_id, d.container_count, d.reserved_for) {
            (Some(client_id), Some(route_id), Some(container_count), Some(reserved_for)) => {
                Ok(NewReservation {
                    code: d.code.trim().to_string(),
                    client_id,
                    route_id,
                    tariff_id: d.tariff_id,
                    container_count,
                    reserved_for,
                    notes: Some(d.notes.trim().to_string()).filter(|n| !n.is_empty()),
                })
            }
            _ => Err("Please complete the required fields".to_string()),
        }
    }

    /// Submit the draft. Navigates to the reservation list on success.
    pub async fn submit(&self, client: &ApiClient) -> FormOutcome {
        let body = match self.build() {
            Ok(body) => body,
            Err(message) => return FormOutcome::Alert(message),
        };
        let result = reservations::create_reservation(client, &body).await;
        if let Ok(created) = &result {
            tracing::info!(reservation_id = %created.id, code = %created.code, "Reservation created");
        }
        FormOutcome::from_result(result, |_| "/gestion-reserva/reservas".to_string())
    }
}

fn rows_or_empty<T>(slice: &'static str, result: ClientResult<Page<T>>) -> Vec<T> {
    match result {
        Ok(page) => page.data,
        Err(e) => {
            tracing::warn!(slice, error = %e, "Reservation form lookup failed, showing no options");
            Vec::new()
        }
    }
}
