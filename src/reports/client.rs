//! HTTP report submitter talking to the scoring backend.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::provider::{ReportSubmitter, SubmissionFailure};
use super::types::{GeneratedReport, ReportConfig};
use crate::config::ReportsConfig;

/// Errors building a [`ReportClient`].
#[derive(Debug, thiserror::Error)]
pub enum ReportClientError {
    #[error("invalid reports API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Success body; the backend wraps the report in `data`, older builds did not.
#[derive(Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Wrapped { data: GeneratedReport },
    Bare(GeneratedReport),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// [`ReportSubmitter`] that POSTs to `{api_base_url}/reports/generate/`.
#[derive(Debug, Clone)]
pub struct ReportClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReportClient {
    /// Path of the generation endpoint, relative to the API base.
    const GENERATE_PATH: &'static str = "reports/generate/";

    pub fn new(config: &ReportsConfig) -> Result<Self, ReportClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: generate_endpoint(&config.api_base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Resolve the generation endpoint against `base`, keeping the base path
/// whether or not it ends in a slash.
pub fn generate_endpoint(base: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(base)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(ReportClient::GENERATE_PATH)
}

#[async_trait]
impl ReportSubmitter for ReportClient {
    async fn submit(&self, config: &ReportConfig) -> Result<GeneratedReport, SubmissionFailure> {
        debug!(
            endpoint = %self.endpoint,
            report_type = %config.report_type,
            applications = config.application_ids.len(),
            "Submitting report request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(config)
            .send()
            .await
            .map_err(|e| SubmissionFailure::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionFailure::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.message)
                .filter(|message| !message.trim().is_empty());
            warn!(status = status.as_u16(), message = ?message, "Report service rejected request");
            return Err(SubmissionFailure::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str::<GenerateResponse>(&body) {
            Ok(GenerateResponse::Wrapped { data } | GenerateResponse::Bare(data)) => Ok(data),
            Err(e) => Err(SubmissionFailure::MalformedResponse(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        assert_eq!(
            generate_endpoint("http://127.0.0.1:8000/api").unwrap().as_str(),
            "http://127.0.0.1:8000/api/reports/generate/"
        );
        assert_eq!(
            generate_endpoint("http://scoring.internal/v2/api/").unwrap().as_str(),
            "http://scoring.internal/v2/api/reports/generate/"
        );
        assert_eq!(
            generate_endpoint("http://scoring.internal").unwrap().as_str(),
            "http://scoring.internal/reports/generate/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ReportsConfig {
            api_base_url: "not a url".to_string(),
            timeout_secs: 5,
        };
        assert!(matches!(
            ReportClient::new(&config),
            Err(ReportClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_response_shapes() {
        let wrapped = r#"{"data": {"report_id": "r-1", "download_url": "/files/r-1.pdf"}}"#;
        let bare = r#"{"report_id": "r-1", "download_url": "/files/r-1.pdf"}"#;
        for body in [wrapped, bare] {
            let (GenerateResponse::Wrapped { data } | GenerateResponse::Bare(data)) =
                serde_json::from_str::<GenerateResponse>(body).unwrap();
            assert_eq!(data.report_id, "r-1");
        }
        assert!(serde_json::from_str::<GenerateResponse>(r#"{"data": {}}"#).is_err());
    }
}
