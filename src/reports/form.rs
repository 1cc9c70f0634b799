//! Report generator form: what the dialog posts, and how it becomes a
//! [`ReportConfig`].

use chrono::NaiveDate;
use serde::Deserialize;

use super::provider::SubmissionFailure;
use super::types::{DateRange, ReportConfig, ReportFilters, ReportFormat, ReportType};

pub const MISSING_IDS_MESSAGE: &str = "Please specify at least one application ID";

/// Raw `application/x-www-form-urlencoded` fields of the generator dialog.
///
/// Checkboxes are absent when unchecked; every other field may be blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub report_type: String,
    #[serde(default)]
    pub application_ids: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub include_charts: Option<String>,
    #[serde(default)]
    pub include_recommendations: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub business_type: String,
}

impl ReportForm {
    /// Validate the form into a request body.
    pub fn into_config(self) -> Result<ReportConfig, SubmissionFailure> {
        let report_type = non_blank(&self.report_type)
            .map(str::parse::<ReportType>)
            .transpose()
            .map_err(|e| SubmissionFailure::Validation(e.to_string()))?
            .unwrap_or_default();

        let application_ids = parse_application_ids(&self.application_ids);
        if application_ids.is_empty() {
            return Err(SubmissionFailure::Validation(MISSING_IDS_MESSAGE.to_string()));
        }

        let format = non_blank(&self.format)
            .map(str::parse::<ReportFormat>)
            .transpose()
            .map_err(|e| SubmissionFailure::Validation(e.to_string()))?
            .unwrap_or_default();

        let date_range = parse_date_range(&self.start_date, &self.end_date)?;

        let filters = ReportFilters {
            grade: non_blank(&self.grade).map(str::to_string),
            risk_level: non_blank(&self.risk_level).map(str::to_string),
            business_type: non_blank(&self.business_type).map(str::to_string),
        };

        Ok(ReportConfig {
            report_type,
            application_ids,
            format,
            include_charts: is_checked(self.include_charts.as_deref()),
            include_recommendations: is_checked(self.include_recommendations.as_deref()),
            date_range,
            filters: (!filters.is_empty()).then_some(filters),
        })
    }
}

/// Split a comma-separated ID list, trimming entries and dropping blanks.
pub fn parse_application_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Both dates blank means no range; otherwise both must parse and be ordered.
pub fn parse_date_range(start: &str, end: &str) -> Result<Option<DateRange>, SubmissionFailure> {
    match (non_blank(start), non_blank(end)) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => {
            let range = DateRange {
                start: parse_date(start)?,
                end: parse_date(end)?,
            };
            if range.end < range.start {
                return Err(SubmissionFailure::Validation(
                    "The end date must not be before the start date".to_string(),
                ));
            }
            Ok(Some(range))
        }
        _ => Err(SubmissionFailure::Validation(
            "A date range needs both a start and an end date".to_string(),
        )),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, SubmissionFailure> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| SubmissionFailure::Validation(format!("Invalid date {raw}: {err}")))
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn is_checked(value: Option<&str>) -> bool {
    value.is_some_and(|v| !matches!(v, "false" | "off" | "0"))
}
