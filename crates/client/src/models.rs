//! Response and request bodies as seen from the client.
//!
//! Responses derive `Deserialize` (and `Serialize` where they are persisted);
//! request bodies derive `Serialize` and omit unset optional fields.

use chrono::NaiveDate;
use logistica_core::modules::Module;
use logistica_core::status::{
    ApprovalStatus, OperationStatus, PortOperationKind, PortOperationStatus, ReservationStatus,
};
use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub id: DbId,
    pub user_id: DbId,
    pub shift: String,
    pub monitoring_zone: String,
}

/// The signed-in user as returned by `/auth/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub module: Module,
    pub employee: Option<Employee>,
    pub operator: Option<Operator>,
    pub last_login_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: Profile,
}

/// Shared shape of small lookup tables (languages, incident types, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lookup {
    pub id: DbId,
    pub code: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Maritime management
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Vessel {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub imo_number: Option<String>,
    pub flag_country: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewVessel {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imo_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    pub id: DbId,
    pub code: String,
    pub vessel_id: DbId,
    pub status: OperationStatus,
    pub container_count: i32,
    pub progress: i16,
    pub origin_port: Option<String>,
    pub destination_port: Option<String>,
    pub departed_at: Option<Timestamp>,
    pub estimated_arrival: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewOperation {
    pub code: String,
    pub vessel_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departed_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OperationChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OperationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OperationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessel_id: Option<DbId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusCount {
    pub status: OperationStatus,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationSummary {
    pub total: i64,
    pub by_status: Vec<StatusCount>,
    pub average_active_progress: f64,
    pub containers_in_flight: i64,
}

impl OperationSummary {
    /// Count for one status, zero when the server omitted it.
    pub fn count(&self, status: OperationStatus) -> i64 {
        self.by_status
            .iter()
            .find(|s| s.status == status)
            .map_or(0, |s| s.count)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Certification {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
    pub country: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCertification {
    pub code: String,
    pub name: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
    pub country: String,
}

/// A certification attached to an operation with its approval state.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationCertification {
    pub id: DbId,
    pub operation_id: DbId,
    pub certification_id: DbId,
    #[serde(default)]
    pub certification_code: Option<String>,
    #[serde(default)]
    pub certification_name: Option<String>,
    pub approval_status: ApprovalStatus,
    pub approved_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperatingCondition {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationCondition {
    pub id: DbId,
    pub operation_id: DbId,
    pub condition_id: DbId,
    pub condition_code: String,
    pub condition_name: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    pub nationality: Option<String>,
    pub operation_id: Option<DbId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCrewMember {
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMemberLanguage {
    pub id: DbId,
    pub crew_member_id: DbId,
    pub language_id: DbId,
    pub language_code: String,
    pub language_name: String,
    pub proficiency_level: Option<String>,
}

// ---------------------------------------------------------------------------
// Reservation management
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub tax_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewClient {
    pub name: String,
    pub tax_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShippingRoute {
    pub id: DbId,
    pub code: String,
    pub origin: String,
    pub destination: String,
    pub transit_days: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewShippingRoute {
    pub code: String,
    pub origin: String,
    pub destination: String,
    pub transit_days: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tariff {
    pub id: DbId,
    pub code: String,
    pub route_id: DbId,
    pub container_type: String,
    pub amount_cents: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTariff {
    pub code: String,
    pub route_id: DbId,
    pub container_type: String,
    pub amount_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TariffFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reservation {
    pub id: DbId,
    pub code: String,
    pub client_id: DbId,
    pub route_id: DbId,
    pub tariff_id: Option<DbId>,
    pub container_count: i32,
    pub reserved_for: NaiveDate,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReservation {
    pub code: String,
    pub client_id: DbId,
    pub route_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_id: Option<DbId>,
    pub container_count: i32,
    pub reserved_for: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReservationChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_for: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReservationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Monitoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Container {
    pub id: DbId,
    pub code: String,
    pub container_type: String,
    pub operation_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sensor {
    pub id: DbId,
    pub code: String,
    pub container_id: DbId,
    pub sensor_type: String,
    pub role: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub id: DbId,
    pub sensor_id: DbId,
    pub notification_type_id: DbId,
    pub notification_type: String,
    pub value: f64,
    pub recorded_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewNotification {
    pub sensor_id: DbId,
    pub notification_type_id: DbId,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_type_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Port operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Incident {
    pub id: DbId,
    pub code: String,
    pub operation_id: DbId,
    pub incident_type_id: DbId,
    pub incident_status_id: DbId,
    pub description: String,
    pub severity: i16,
    pub occurred_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewIncident {
    pub code: String,
    pub operation_id: DbId,
    pub incident_type_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_status_id: Option<DbId>,
    pub description: String,
    pub severity: i16,
    pub occurred_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IncidentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_status_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<i16>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IncidentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub id: DbId,
    pub code: String,
    pub operation_id: Option<DbId>,
    pub report_date: NaiveDate,
    pub detail: String,
}

/// A report with the incidents it covers. Fields of the report are inlined.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportDetail {
    #[serde(flatten)]
    pub report: Report,
    pub incident_ids: Vec<DbId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<NaiveDate>,
    pub detail: String,
}

/// Body for `/reportes/generar`. An empty `incident_ids` is valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateReport {
    pub operation_id: DbId,
    pub incident_ids: Vec<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub detail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortOperation {
    pub id: DbId,
    pub code: String,
    pub operation_id: Option<DbId>,
    pub berth: String,
    pub kind: PortOperationKind,
    pub status: PortOperationStatus,
    pub scheduled_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPortOperation {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<DbId>,
    pub berth: String,
    pub kind: PortOperationKind,
    pub scheduled_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PortOperationChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub berth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PortOperationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<Timestamp>,
}

/// Filter placeholder for list endpoints without filters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoFilter {}
