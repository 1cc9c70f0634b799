use axum::{
    Form, Json, Router,
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::reports::{ReportClient, ReportForm, ReportSubmitter};
use crate::ui::pages::{LoginPage, ReportOutcome, ReportToast, ReportsPage, ReportsQuery};
use crate::ui::{render_html, render_page};

/// Upper bound for any single request, report generation included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let client = ReportClient::new(&config.reports)?;
    info!(
        name: "config.loaded",
        reports_endpoint = %client.endpoint(),
        static_dir = %config.server.static_dir,
        "Configuration loaded"
    );

    let reports: Arc<dyn ReportSubmitter> = Arc::new(client);
    let state = AppState {
        config: Arc::clone(&config),
        reports,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(|| async { Redirect::to("/reports") }))
        .route("/login", get(login_page))
        .route("/reports", get(reports_page))
        .route("/api/reports/generate", post(api_generate_report))
        .route("/api/health", get(api_health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(
            |req: Request, next: Next| async move {
                match tokio::time::timeout(REQUEST_TIMEOUT, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters of the login page.
#[derive(Debug, Deserialize)]
struct LoginQuery {
    /// Message from the auth service after a failed attempt.
    error: Option<String>,
}

/// GET /login - Sign-in form.
async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> impl IntoResponse {
    let login_url = state.config.auth.login_url.clone();
    let error = query.error.filter(|message| !message.trim().is_empty());
    let content = render_html(move || view! { <LoginPage login_url=login_url error=error /> });
    Html(render_page("Sign In", &content))
}

/// GET /reports - Reports overview and generator dialog.
async fn reports_page(Query(query): Query<ReportsQuery>) -> impl IntoResponse {
    let today = chrono::Local::now().date_naive();
    let content = render_html(move || view! { <ReportsPage query=query today=today /> });
    Html(render_page("Reports", &content))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /api/reports/generate - Submit the generator form, answer with a toast.
///
/// Always answers 200 so HTMX swaps the toast in for failures too.
async fn api_generate_report(
    State(state): State<AppState>,
    Form(form): Form<ReportForm>,
) -> impl IntoResponse {
    let outcome = match form.into_config() {
        Ok(config) => match state.reports.submit(&config).await {
            Ok(report) => {
                info!(
                    name: "report.submitted",
                    report_id = %report.report_id,
                    report_type = %config.report_type,
                    format = %config.format,
                    applications = config.application_ids.len(),
                    "Report generated"
                );
                ReportOutcome::Generated {
                    report,
                    format: config.format,
                }
            }
            Err(failure) => {
                warn!(name: "report.failed", error = %failure, "Report generation failed");
                ReportOutcome::Failed(failure.user_message().to_string())
            }
        },
        Err(failure) => {
            warn!(name: "report.failed", error = %failure, "Report form rejected");
            ReportOutcome::Failed(failure.user_message().to_string())
        }
    };

    Html(render_html(move || view! { <ReportToast outcome=outcome /> }))
}

/// GET /api/health - Liveness check.
async fn api_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
