//! Generate-report form: pick an operation, select some of its incidents.

use std::collections::BTreeSet;

use logistica_core::pagination::MAX_PAGE_LIMIT;
use logistica_core::types::DbId;

use super::forms::{FormOutcome, RequiredFields};
use super::state::LoadState;
use crate::api::port_operations;
use crate::http::{ApiClient, PageQuery};
use crate::models::{GenerateReport, Incident, IncidentFilter};

#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    operation_id: Option<DbId>,
    incidents: LoadState<Vec<Incident>>,
    selected: BTreeSet<DbId>,
    pub code: String,
    pub detail: String,
}

impl ReportForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation_id(&self) -> Option<DbId> {
        self.operation_id
    }

    pub fn incidents(&self) -> &LoadState<Vec<Incident>> {
        &self.incidents
    }

    /// Selected incident ids, in a stable order.
    pub fn selected(&self) -> Vec<DbId> {
        self.selected.iter().copied().collect()
    }

    /// Switch to `operation_id` and load its incidents. Clears the selection.
    pub async fn select_operation(&mut self, client: &ApiClient, operation_id: DbId) {
        self.operation_id = Some(operation_id);
        self.selected.clear();
        self.incidents = LoadState::Loading;

        let filter = IncidentFilter {
            operation_id: Some(operation_id),
        };
        let result =
            port_operations::list_incidents(client, PageQuery::new(1, MAX_PAGE_LIMIT), &filter)
                .await;
        self.incidents = LoadState::from_result(result.map(|page| page.data));
    }

    /// Toggle an incident of the current operation. Returns whether it is now
    /// selected; ids not offered by the form are ignored.
    pub fn toggle(&mut self, incident_id: DbId) -> bool {
        let offered = self
            .incidents
            .ready()
            .is_some_and(|rows| rows.iter().any(|i| i.id == incident_id));
        if !offered {
            return false;
        }
        if !self.selected.remove(&incident_id) {
            self.selected.insert(incident_id);
        }
        self.selected.contains(&incident_id)
    }

    /// Build the request. An empty selection is allowed.
    pub fn build(&self) -> Result<GenerateReport, String> {
        RequiredFields::new()
            .present("operation", &self.operation_id)
            .check()?;
        let operation_id = self
            .operation_id
            .ok_or_else(|| "Please complete the required fields: operation".to_string())?;

        Ok(GenerateReport {
            operation_id,
            incident_ids: self.selected(),
            code: Some(self.code.trim().to_string()).filter(|c| !c.is_empty()),
            detail: self.detail.trim().to_string(),
        })
    }

    /// Generate the report and navigate to it.
    pub async fn submit(&self, client: &ApiClient) -> FormOutcome {
        let body = match self.build() {
            Ok(body) => body,
            Err(message) => return FormOutcome::Alert(message),
        };
        let result = port_operations::generate_report(client, &body).await;
        FormOutcome::from_result(result, |created| {
            format!("/operaciones-portuarias/reportes/{}", created.report.id)
        })
    }
}
