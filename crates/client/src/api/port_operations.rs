//! `/operaciones-portuarias` endpoints.

use logistica_core::pagination::Page;
use logistica_core::types::DbId;

use crate::error::ClientResult;
use crate::http::{ApiClient, PageQuery};
use crate::models::{
    GenerateReport, Incident, IncidentChanges, IncidentFilter, Lookup, NewIncident,
    NewPortOperation, NewReport, NoFilter, PortOperation, PortOperationChanges, Report,
    ReportDetail,
};

const BASE: &str = "/operaciones-portuarias";

// ---- incidents ----

pub async fn list_incidents(
    client: &ApiClient,
    page: PageQuery,
    filter: &IncidentFilter,
) -> ClientResult<Page<Incident>> {
    client
        .get_page(&format!("{BASE}/incidentes"), page, filter)
        .await
}

pub async fn get_incident(client: &ApiClient, id: DbId) -> ClientResult<Incident> {
    client.get(&format!("{BASE}/incidentes/{id}")).await
}

pub async fn create_incident(client: &ApiClient, input: &NewIncident) -> ClientResult<Incident> {
    client.post(&format!("{BASE}/incidentes"), input).await
}

pub async fn update_incident(
    client: &ApiClient,
    id: DbId,
    changes: &IncidentChanges,
) -> ClientResult<Incident> {
    client.put(&format!("{BASE}/incidentes/{id}"), changes).await
}

pub async fn incident_types(client: &ApiClient) -> ClientResult<Vec<Lookup>> {
    client.get(&format!("{BASE}/tipos-incidente")).await
}

pub async fn incident_statuses(client: &ApiClient) -> ClientResult<Vec<Lookup>> {
    client.get(&format!("{BASE}/estados-incidente")).await
}

// ---- reports ----

pub async fn list_reports(client: &ApiClient, page: PageQuery) -> ClientResult<Page<Report>> {
    client
        .get_page(&format!("{BASE}/reportes"), page, &NoFilter {})
        .await
}

pub async fn get_report(client: &ApiClient, id: DbId) -> ClientResult<ReportDetail> {
    client.get(&format!("{BASE}/reportes/{id}")).await
}

pub async fn create_report(client: &ApiClient, input: &NewReport) -> ClientResult<Report> {
    client.post(&format!("{BASE}/reportes"), input).await
}

/// Create a report from a selection of one operation's incidents.
pub async fn generate_report(
    client: &ApiClient,
    input: &GenerateReport,
) -> ClientResult<ReportDetail> {
    client
        .post(&format!("{BASE}/reportes/generar"), input)
        .await
}

pub async fn delete_report(client: &ApiClient, id: DbId) -> ClientResult<()> {
    client.delete(&format!("{BASE}/reportes/{id}")).await
}

// ---- berth operations ----

pub async fn list_port_operations(
    client: &ApiClient,
    page: PageQuery,
) -> ClientResult<Page<PortOperation>> {
    client
        .get_page(&format!("{BASE}/operaciones"), page, &NoFilter {})
        .await
}

pub async fn create_port_operation(
    client: &ApiClient,
    input: &NewPortOperation,
) -> ClientResult<PortOperation> {
    client.post(&format!("{BASE}/operaciones"), input).await
}

pub async fn update_port_operation(
    client: &ApiClient,
    id: DbId,
    changes: &PortOperationChanges,
) -> ClientResult<PortOperation> {
    client
        .put(&format!("{BASE}/operaciones/{id}"), changes)
        .await
}
