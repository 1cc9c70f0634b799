//! Credit Scoring UI
//!
//! Server-rendered front end for a credit scoring service: a login screen,
//! a reports page and a report generator that submits to the scoring API.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server rendering full pages and HTMX fragments
//! - **Reports**: report configuration model, form parsing and the API client
//! - **UI**: Leptos SSR components with schema-driven class variants
//!
//! # Modules
//!
//! - [`config`]: layered application configuration
//! - [`reports`]: report types, form validation and submission
//! - [`server`]: router and request handlers
//! - [`ui`]: components, compound-component state and pages

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod reports;
pub mod server;
pub mod telemetry;
pub mod ui;

use crate::config::AppConfig;
use crate::reports::ReportSubmitter;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Report generation backend.
    pub reports: Arc<dyn ReportSubmitter>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("reports", &self.reports)
            .finish()
    }
}
