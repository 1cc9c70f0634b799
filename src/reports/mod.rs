//! Report generation: configuration types, form validation, and the
//! submitter seam with its HTTP implementation.
//!
//! # Usage
//!
//! ```rust,ignore
//! let client = ReportClient::new(&config.reports)?;
//! let report = ReportForm { /* posted fields */ }
//!     .into_config()
//!     .map(|config| client.submit(&config))?
//!     .await?;
//! ```

mod client;
mod form;
mod provider;
mod types;

pub use client::{ReportClient, ReportClientError, generate_endpoint};
pub use form::{MISSING_IDS_MESSAGE, ReportForm, parse_application_ids, parse_date_range};
pub use provider::{ReportSubmitter, SubmissionFailure};
pub use types::{
    DateRange, GRADE_OPTIONS, GeneratedReport, RISK_LEVEL_OPTIONS, ReportConfig, ReportFilters,
    ReportFormat, ReportType, UnknownOption,
};
