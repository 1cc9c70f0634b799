//! Full pages and the fragments the server swaps into them.

mod login;
mod reports;

pub use login::LoginPage;
pub use reports::{
    DEFAULT_PERIOD, DEFAULT_TAB, DIALOG_REGION_ID, PERIODS, ReportGenerator, ReportOutcome,
    ReportToast, ReportsPage, ReportsQuery, TOAST_REGION_ID, period_start,
};
