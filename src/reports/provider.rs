//! The seam between the UI and whatever actually generates reports.

use async_trait::async_trait;

use super::types::{GeneratedReport, ReportConfig};

/// Why a report could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionFailure {
    /// The form was rejected before anything was sent.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-success status.
    #[error("report service responded with status {status}")]
    Rejected {
        status: u16,
        /// The `message` field of the error body, if there was one.
        message: Option<String>,
    },

    /// The request never got an answer.
    #[error("report service unreachable: {0}")]
    Transport(String),

    /// A success status with a body we could not read.
    #[error("unexpected report service response: {0}")]
    MalformedResponse(String),
}

impl SubmissionFailure {
    /// Shown when the backend gives no usable message.
    pub const FALLBACK_MESSAGE: &'static str = "Failed to generate report";

    /// Text for the error toast.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::Rejected {
                message: Some(message),
                ..
            } => message,
            _ => Self::FALLBACK_MESSAGE,
        }
    }
}

/// Submits report configurations to a backend.
#[async_trait]
pub trait ReportSubmitter: Send + Sync + std::fmt::Debug {
    /// Request a report; resolves once the backend has accepted it.
    async fn submit(&self, config: &ReportConfig) -> Result<GeneratedReport, SubmissionFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        assert_eq!(
            SubmissionFailure::Validation("Please specify at least one application ID".into())
                .user_message(),
            "Please specify at least one application ID"
        );
        assert_eq!(
            SubmissionFailure::Rejected {
                status: 400,
                message: Some("Application APP-9 not found".into()),
            }
            .user_message(),
            "Application APP-9 not found"
        );
        assert_eq!(
            SubmissionFailure::Rejected {
                status: 500,
                message: None
            }
            .user_message(),
            SubmissionFailure::FALLBACK_MESSAGE
        );
        assert_eq!(
            SubmissionFailure::Transport("connection refused".into()).user_message(),
            "Failed to generate report"
        );
    }
}
