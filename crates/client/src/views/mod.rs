//! Page view models.
//!
//! Each view owns the data a page renders and the rules for loading and
//! submitting it. Errors stop here: they become [`LoadState::Failed`] or
//! [`FormOutcome::Alert`] and are logged.

pub mod dashboard;
pub mod forms;
pub mod pagination;
pub mod report_form;
pub mod reservation_form;
pub mod state;

pub use dashboard::OperationsDashboard;
pub use forms::{FormOutcome, RequiredFields};
pub use pagination::PagedList;
pub use report_form::ReportForm;
pub use reservation_form::ReservationForm;
pub use state::LoadState;
