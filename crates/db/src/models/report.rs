//! Report model and DTOs.

use chrono::NaiveDate;
use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `operaciones_portuarias.reports`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub code: String,
    pub operation_id: Option<DbId>,
    pub report_date: NaiveDate,
    pub detail: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A report together with the incidents it was generated from.
#[derive(Debug, Clone, Serialize)]
pub struct ReportWithIncidents {
    #[serde(flatten)]
    pub report: Report,
    pub incident_ids: Vec<DbId>,
}

/// DTO for a standalone report.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReport {
    /// Generated when omitted.
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    pub operation_id: Option<DbId>,
    /// Defaults to today (UTC) when omitted.
    pub report_date: Option<NaiveDate>,
    #[validate(length(max = 10000))]
    pub detail: String,
}

/// DTO for generating a report from a selection of an operation's incidents.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateReport {
    pub operation_id: DbId,
    /// May be empty; the report is still created.
    #[serde(default)]
    pub incident_ids: Vec<DbId>,
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    pub report_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub detail: String,
}
