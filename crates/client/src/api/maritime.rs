//! `/gestion-maritima` endpoints.

use logistica_core::pagination::Page;
use logistica_core::status::{ApprovalStatus, OperationStatus};
use logistica_core::types::DbId;
use serde_json::json;

use crate::error::ClientResult;
use crate::http::{empty_on_not_found, ApiClient, PageQuery};
use crate::models::{
    Certification, CrewMember, CrewMemberLanguage, Lookup, NewCertification, NewCrewMember,
    NewOperation, NewVessel, NoFilter, OperatingCondition, Operation, OperationCertification,
    OperationChanges, OperationCondition, OperationFilter, OperationSummary, Vessel,
};

const BASE: &str = "/gestion-maritima";

// ---- vessels ----

pub async fn list_vessels(client: &ApiClient, page: PageQuery) -> ClientResult<Page<Vessel>> {
    client
        .get_page(&format!("{BASE}/embarcaciones"), page, &NoFilter {})
        .await
}

pub async fn create_vessel(client: &ApiClient, input: &NewVessel) -> ClientResult<Vessel> {
    client.post(&format!("{BASE}/embarcaciones"), input).await
}

pub async fn delete_vessel(client: &ApiClient, id: DbId) -> ClientResult<()> {
    client.delete(&format!("{BASE}/embarcaciones/{id}")).await
}

// ---- operations ----

pub async fn list_operations(
    client: &ApiClient,
    page: PageQuery,
    filter: &OperationFilter,
) -> ClientResult<Page<Operation>> {
    client
        .get_page(&format!("{BASE}/operaciones"), page, filter)
        .await
}

pub async fn get_operation(client: &ApiClient, id: DbId) -> ClientResult<Operation> {
    client.get(&format!("{BASE}/operaciones/{id}")).await
}

pub async fn create_operation(client: &ApiClient, input: &NewOperation) -> ClientResult<Operation> {
    client.post(&format!("{BASE}/operaciones"), input).await
}

pub async fn update_operation(
    client: &ApiClient,
    id: DbId,
    changes: &OperationChanges,
) -> ClientResult<Operation> {
    client.put(&format!("{BASE}/operaciones/{id}"), changes).await
}

/// `PUT /operaciones/{id}/estado`. The server rejects moves outside the
/// lifecycle table with 400.
pub async fn transition_operation(
    client: &ApiClient,
    id: DbId,
    status: OperationStatus,
) -> ClientResult<Operation> {
    client
        .put(
            &format!("{BASE}/operaciones/{id}/estado"),
            &json!({ "status": status }),
        )
        .await
}

pub async fn delete_operation(client: &ApiClient, id: DbId) -> ClientResult<()> {
    client.delete(&format!("{BASE}/operaciones/{id}")).await
}

pub async fn operations_summary(client: &ApiClient) -> ClientResult<OperationSummary> {
    client.get(&format!("{BASE}/operaciones/resumen")).await
}

// ---- certifications ----

pub async fn list_certifications(
    client: &ApiClient,
    page: PageQuery,
) -> ClientResult<Page<Certification>> {
    client
        .get_page(&format!("{BASE}/certificaciones"), page, &NoFilter {})
        .await
}

pub async fn create_certification(
    client: &ApiClient,
    input: &NewCertification,
) -> ClientResult<Certification> {
    client.post(&format!("{BASE}/certificaciones"), input).await
}

/// Certifications attached to an operation. A 404 reads as "none yet".
pub async fn operation_certifications(
    client: &ApiClient,
    operation_id: DbId,
) -> ClientResult<Vec<OperationCertification>> {
    let result = client
        .get(&format!("{BASE}/operaciones/{operation_id}/certificaciones"))
        .await;
    empty_on_not_found(result, Vec::new)
}

pub async fn link_certification(
    client: &ApiClient,
    operation_id: DbId,
    certification_id: DbId,
) -> ClientResult<OperationCertification> {
    client
        .post(
            &format!("{BASE}/operaciones/{operation_id}/certificaciones"),
            &json!({ "certification_id": certification_id }),
        )
        .await
}

pub async fn review_certification(
    client: &ApiClient,
    operation_id: DbId,
    certification_id: DbId,
    decision: ApprovalStatus,
) -> ClientResult<OperationCertification> {
    client
        .put(
            &format!("{BASE}/operaciones/{operation_id}/certificaciones/{certification_id}"),
            &json!({ "approval_status": decision }),
        )
        .await
}

// ---- operating conditions ----

pub async fn list_conditions(client: &ApiClient) -> ClientResult<Vec<OperatingCondition>> {
    client.get(&format!("{BASE}/condiciones")).await
}

pub async fn operation_conditions(
    client: &ApiClient,
    operation_id: DbId,
) -> ClientResult<Vec<OperationCondition>> {
    client
        .get(&format!("{BASE}/operaciones/{operation_id}/condiciones"))
        .await
}

// ---- crew ----

pub async fn list_crew(client: &ApiClient, page: PageQuery) -> ClientResult<Page<CrewMember>> {
    client
        .get_page(&format!("{BASE}/tripulantes"), page, &NoFilter {})
        .await
}

pub async fn create_crew_member(
    client: &ApiClient,
    input: &NewCrewMember,
) -> ClientResult<CrewMember> {
    client.post(&format!("{BASE}/tripulantes"), input).await
}

pub async fn crew_languages(
    client: &ApiClient,
    crew_member_id: DbId,
) -> ClientResult<Vec<CrewMemberLanguage>> {
    client
        .get(&format!("{BASE}/tripulantes/{crew_member_id}/idiomas"))
        .await
}

pub async fn add_crew_language(
    client: &ApiClient,
    crew_member_id: DbId,
    language_id: DbId,
    proficiency_level: Option<&str>,
) -> ClientResult<CrewMemberLanguage> {
    client
        .post(
            &format!("{BASE}/tripulantes/{crew_member_id}/idiomas"),
            &json!({ "language_id": language_id, "proficiency_level": proficiency_level }),
        )
        .await
}

pub async fn list_languages(client: &ApiClient) -> ClientResult<Vec<Lookup>> {
    client.get(&format!("{BASE}/idiomas")).await
}
