//! Operations dashboard: status summary and the operations under way.

use logistica_core::pagination::MAX_PAGE_LIMIT;
use logistica_core::status::OperationStatus;

use super::state::LoadState;
use crate::api::maritime;
use crate::http::{ApiClient, PageQuery};
use crate::models::{Operation, OperationFilter, OperationSummary};

#[derive(Debug, Clone, Default)]
pub struct OperationsDashboard {
    pub summary: LoadState<OperationSummary>,
    pub in_progress: LoadState<Vec<Operation>>,
}

/// Started and not yet finished.
pub fn is_in_progress(status: OperationStatus) -> bool {
    matches!(
        status,
        OperationStatus::Navigating | OperationStatus::InTransit | OperationStatus::InPort
    )
}

impl OperationsDashboard {
    /// Load both panels concurrently; each fails independently.
    pub async fn load(client: &ApiClient) -> Self {
        let filter = OperationFilter::default();
        let (summary, operations) = tokio::join!(
            maritime::operations_summary(client),
            maritime::list_operations(client, PageQuery::new(1, MAX_PAGE_LIMIT), &filter),
        );

        let in_progress = operations.map(|page| {
            page.data
                .into_iter()
                .filter(|op| is_in_progress(op.status))
                .collect::<Vec<_>>()
        });

        Self {
            summary: LoadState::from_value(summary),
            in_progress: LoadState::from_result(in_progress),
        }
    }
}
