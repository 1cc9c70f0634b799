//! Report configuration as sent to the scoring backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A form value that is not one of the enumerated options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Kind of report to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    #[default]
    ScoreBreakdown,
    RiskAssessment,
    ComparativeAnalysis,
    PortfolioSummary,
}

impl ReportType {
    pub const ALL: [Self; 4] = [
        Self::ScoreBreakdown,
        Self::RiskAssessment,
        Self::ComparativeAnalysis,
        Self::PortfolioSummary,
    ];

    /// `(key, label)` pairs for option lists.
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("score_breakdown", "Score Breakdown Report"),
        ("risk_assessment", "Risk Assessment Report"),
        ("comparative_analysis", "Comparative Analysis Report"),
        ("portfolio_summary", "Portfolio Summary Report"),
    ];

    /// Wire key.
    pub fn as_str(self) -> &'static str {
        Self::OPTIONS[self as usize].0
    }

    pub fn label(self) -> &'static str {
        Self::OPTIONS[self as usize].1
    }

    /// One-line summary shown on the reports page.
    pub fn description(self) -> &'static str {
        match self {
            Self::ScoreBreakdown => "Detailed analysis of credit score components",
            Self::RiskAssessment => "Risk factors, mitigation strategies and monitoring advice",
            Self::ComparativeAnalysis => "Peer comparison against industry benchmarks",
            Self::PortfolioSummary => "Aggregate view across the application portfolio",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "report type",
                value: s.to_string(),
            })
    }
}

/// Output format of a generated report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Excel,
    Html,
    Json,
}

impl ReportFormat {
    pub const ALL: [Self; 4] = [Self::Pdf, Self::Excel, Self::Html, Self::Json];

    /// `(key, label)` pairs for option lists.
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("pdf", "PDF Document"),
        ("excel", "Excel Spreadsheet"),
        ("html", "HTML Report"),
        ("json", "JSON Data"),
    ];

    pub fn as_str(self) -> &'static str {
        Self::OPTIONS[self as usize].0
    }

    pub fn label(self) -> &'static str {
        Self::OPTIONS[self as usize].1
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "format",
                value: s.to_string(),
            })
    }
}

/// Grade filter options; the empty key means no filter.
pub const GRADE_OPTIONS: &[(&str, &str)] = &[
    ("", "All Grades"),
    ("A", "Grade A"),
    ("B", "Grade B"),
    ("C", "Grade C"),
    ("R", "Grade R"),
];

/// Risk level filter options; the empty key means no filter.
pub const RISK_LEVEL_OPTIONS: &[(&str, &str)] = &[
    ("", "All Risk Levels"),
    ("low", "Low Risk"),
    ("medium", "Medium Risk"),
    ("high", "High Risk"),
    ("very_high", "Very High Risk"),
];

/// Inclusive application date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Optional narrowing of the application set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
}

impl ReportFilters {
    pub fn is_empty(&self) -> bool {
        self.grade.is_none() && self.risk_level.is_none() && self.business_type.is_none()
    }
}

/// Body of a report generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub report_type: ReportType,
    pub application_ids: Vec<String>,
    pub format: ReportFormat,
    pub include_charts: bool,
    pub include_recommendations: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<ReportFilters>,
}

/// What the backend returns for a generated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub report_id: String,
    pub download_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde() {
        for kind in ReportType::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
            assert_eq!(kind.as_str().parse::<ReportType>().unwrap(), kind);
        }
        for format in ReportFormat::ALL {
            let json = serde_json::to_value(format).unwrap();
            assert_eq!(json, format.as_str());
        }
    }

    #[test]
    fn test_unknown_option() {
        let err = "word".parse::<ReportFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown format: word");
    }

    #[test]
    fn test_config_wire_shape() {
        let config = ReportConfig {
            report_type: ReportType::RiskAssessment,
            application_ids: vec!["APP-001".into(), "APP-002".into()],
            format: ReportFormat::Excel,
            include_charts: true,
            include_recommendations: false,
            date_range: Some(DateRange {
                start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            }),
            filters: Some(ReportFilters {
                grade: Some("A".into()),
                ..ReportFilters::default()
            }),
        };

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "report_type": "risk_assessment",
                "application_ids": ["APP-001", "APP-002"],
                "format": "excel",
                "include_charts": true,
                "include_recommendations": false,
                "date_range": {"start": "2024-01-01", "end": "2024-03-31"},
                "filters": {"grade": "A"}
            })
        );
    }

    #[test]
    fn test_optional_sections_omitted() {
        let config = ReportConfig {
            report_type: ReportType::default(),
            application_ids: vec!["APP-001".into()],
            format: ReportFormat::default(),
            include_charts: true,
            include_recommendations: true,
            date_range: None,
            filters: None,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("date_range").is_none());
        assert!(json.get("filters").is_none());
    }
}
