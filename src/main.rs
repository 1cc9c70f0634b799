//! Credit Scoring UI Server
//!
//! Entry point for the server-rendered credit scoring front end.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use credit_scoring_ui::config::AppConfig;
use credit_scoring_ui::{server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init();

    let config = Arc::new(AppConfig::load()?);

    info!(
        name: "app.starting",
        host = %config.server.host,
        port = config.server.port,
        reports_api = %config.reports.api_base_url,
        "Starting credit scoring UI"
    );

    server::start_server(config).await
}
