//! Reports page, the report generator dialog, and the toast fragment the
//! generator's HTMX request swaps in.
//!
//! The page is rebuilt from its query string: `tab` picks the active tab,
//! `period` the reporting period, `menu=period` opens the period select and
//! `dialog=open` shows the generator.

use chrono::{Months, NaiveDate};
use leptos::prelude::*;
use serde::Deserialize;
use url::form_urlencoded;

use crate::reports::{GRADE_OPTIONS, GeneratedReport, RISK_LEVEL_OPTIONS, ReportFormat, ReportType};
use crate::ui::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardDescription, CardHeader,
    CardTitle, CheckCircleIcon, AlertCircleIcon, DownloadIcon, FileTextIcon, FormSelect, Input,
    Modal, ModalSize, Select, SelectContent, SelectItem, SelectTrigger, SelectValue,
    SettingsIcon, Tabs, TabsContent, TabsList, TabsTrigger, XIcon, button_classes,
};
use crate::ui::context::{SelectEvent, SelectPhase};

/// Reporting periods: key, label, months back from today.
pub const PERIODS: &[(&str, &str, u32)] = &[
    ("1m", "Last Month", 1),
    ("3m", "Last 3 Months", 3),
    ("6m", "Last 6 Months", 6),
    ("1y", "Last Year", 12),
];

pub const DEFAULT_PERIOD: &str = "3m";
pub const DEFAULT_TAB: &str = "types";
pub const TABS: &[&str] = &["types", "formats"];

/// Element ids the generator's HTMX request targets.
pub const TOAST_REGION_ID: &str = "report-toast";
pub const DIALOG_REGION_ID: &str = "report-dialog";

/// Query string of `/reports`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportsQuery {
    pub tab: Option<String>,
    pub period: Option<String>,
    pub menu: Option<String>,
    pub dialog: Option<String>,
}

impl ReportsQuery {
    /// Active tab; unknown keys fall back to the default.
    pub fn tab(&self) -> &str {
        self.tab
            .as_deref()
            .filter(|key| TABS.contains(key))
            .unwrap_or(DEFAULT_TAB)
    }

    /// Selected period; unknown keys fall back to the default.
    pub fn period(&self) -> &str {
        self.period
            .as_deref()
            .filter(|key| PERIODS.iter().any(|(period, _, _)| period == key))
            .unwrap_or(DEFAULT_PERIOD)
    }

    pub fn period_menu_open(&self) -> bool {
        self.menu.as_deref() == Some("period")
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.as_deref() == Some("open")
    }

    /// `/reports` with this query.
    pub fn href(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in [
            ("tab", &self.tab),
            ("period", &self.period),
            ("menu", &self.menu),
            ("dialog", &self.dialog),
        ] {
            if let Some(value) = value {
                query.append_pair(key, value);
            }
        }
        let query = query.finish();
        if query.is_empty() {
            "/reports".to_string()
        } else {
            format!("/reports?{query}")
        }
    }

    pub fn with_tab(&self, tab: &str) -> Self {
        Self {
            tab: Some(tab.to_string()),
            ..self.clone()
        }
    }

    /// `menu` after the period select handles `event`.
    fn period_menu_after(&self, event: &SelectEvent) -> Option<String> {
        SelectPhase::from_open(self.period_menu_open())
            .next(event)
            .is_open()
            .then(|| "period".to_string())
    }

    /// Choose a period and close the menu.
    pub fn with_period(&self, period: &str) -> Self {
        Self {
            period: Some(period.to_string()),
            menu: self.period_menu_after(&SelectEvent::ItemSelected(period.to_string())),
            ..self.clone()
        }
    }

    pub fn toggle_period_menu(&self) -> Self {
        Self {
            menu: self.period_menu_after(&SelectEvent::TriggerClicked),
            ..self.clone()
        }
    }

    pub fn with_dialog(&self, open: bool) -> Self {
        Self {
            dialog: open.then(|| "open".to_string()),
            ..self.clone()
        }
    }
}

/// First day covered by `period`, counting back from `today`.
pub fn period_start(period: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (_, _, months) = PERIODS.iter().find(|(key, _, _)| *key == period)?;
    today.checked_sub_months(Months::new(*months))
}

/// Reports overview with the period picker, report catalogue and generator.
#[component]
pub fn ReportsPage(
    /// Parsed query string.
    query: ReportsQuery,
    /// Date the period window ends on.
    today: NaiveDate,
) -> impl IntoView {
    let period = query.period().to_string();
    let start = period_start(&period, today).unwrap_or(today);
    let open_dialog_href = query.with_dialog(true).href();
    let close_dialog_href = query.with_dialog(false).href();
    let menu_href = query.toggle_period_menu().href();
    let types_href = query.with_tab("types").href();
    let formats_href = query.with_tab("formats").href();
    let period_items = PERIODS
        .iter()
        .map(|&(key, label, _)| (key, label, query.with_period(key).href()))
        .collect::<Vec<_>>();

    view! {
        <main class="container mx-auto max-w-5xl space-y-6 px-4 py-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Reports"</h1>
                    <p class="text-gray-600">"Generate and download credit scoring reports"</p>
                </div>
                <div class="flex gap-2">
                    <Select default_value=period default_open=query.period_menu_open() class="w-40">
                        <SelectTrigger href=menu_href>
                            <SelectValue placeholder="Period" />
                        </SelectTrigger>
                        <SelectContent>
                            {period_items
                                .iter()
                                .map(|&(key, label, ref href)| {
                                    view! { <SelectItem value=key href=href.clone()>{label}</SelectItem> }
                                })
                                .collect_view()}
                        </SelectContent>
                    </Select>
                    <a
                        href=open_dialog_href
                        class=button_classes(ButtonVariant::Default, ButtonSize::Default, "flex items-center gap-2")
                    >
                        <FileTextIcon />
                        "Generate Report"
                    </a>
                </div>
            </div>

            <div id=TOAST_REGION_ID aria-live="polite"></div>

            <Tabs default_value=query.tab().to_string()>
                <TabsList>
                    <TabsTrigger value="types" href=types_href>"Report Types"</TabsTrigger>
                    <TabsTrigger value="formats" href=formats_href>"Formats"</TabsTrigger>
                </TabsList>
                <TabsContent value="types">
                    <div class="grid gap-4 md:grid-cols-2">
                        {ReportType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <Card>
                                        <CardHeader>
                                            <CardTitle>{kind.label()}</CardTitle>
                                            <CardDescription>{kind.description()}</CardDescription>
                                        </CardHeader>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </TabsContent>
                <TabsContent value="formats">
                    <div class="flex flex-wrap gap-2">
                        {ReportFormat::ALL
                            .into_iter()
                            .map(|format| {
                                view! {
                                    <Badge variant=BadgeVariant::Outline>{format.label()}</Badge>
                                }
                            })
                            .collect_view()}
                    </div>
                </TabsContent>
            </Tabs>

            <div id=DIALOG_REGION_ID>
                <ReportGenerator
                    open=query.dialog_open()
                    close_href=close_dialog_href
                    start_date=start.to_string()
                    end_date=today.to_string()
                />
            </div>
        </main>
    }
}

/// Report generation dialog.
///
/// Posts the form with HTMX and swaps the response into the toast region
/// only, so the entered values survive a failed attempt.
#[component]
pub fn ReportGenerator(
    /// Whether the dialog is shown.
    open: bool,
    /// Link that closes the dialog.
    #[prop(into)]
    close_href: String,
    /// Prefilled start of the date range (`YYYY-MM-DD`).
    #[prop(optional, into)]
    start_date: String,
    /// Prefilled end of the date range (`YYYY-MM-DD`).
    #[prop(optional, into)]
    end_date: String,
) -> impl IntoView {
    let cancel_href = close_href.clone();
    let toast_target = format!("#{TOAST_REGION_ID}");

    view! {
        <Modal open=open title="Generate Report" size=ModalSize::Lg close_href=close_href>
            <form
                class="space-y-6"
                hx-post="/api/reports/generate"
                hx-target=toast_target
                hx-swap="innerHTML"
                hx-disabled-elt="find button[type='submit']"
            >
                <FormSelect
                    label="Report Type"
                    id="report_type"
                    name="report_type"
                    options=ReportType::OPTIONS
                    selected="score_breakdown"
                />

                <Input
                    label="Application IDs (comma-separated)"
                    id="application_ids"
                    name="application_ids"
                    placeholder="APP-001, APP-002, APP-003..."
                    helper_text="Enter one or more application IDs"
                />

                <div class="border rounded-lg p-4 space-y-4">
                    <h3 class="flex items-center gap-2 font-medium">
                        <SettingsIcon />
                        "Report Options"
                    </h3>
                    <FormSelect
                        label="Format"
                        id="format"
                        name="format"
                        options=ReportFormat::OPTIONS
                        selected="pdf"
                    />
                    <div class="flex items-center space-x-4 text-sm">
                        <label class="flex items-center">
                            <input type="checkbox" name="include_charts" value="true" checked=true class="mr-2" />
                            "Include Charts and Graphs"
                        </label>
                        <label class="flex items-center">
                            <input
                                type="checkbox"
                                name="include_recommendations"
                                value="true"
                                checked=true
                                class="mr-2"
                            />
                            "Include Recommendations"
                        </label>
                    </div>
                </div>

                <div class="border rounded-lg p-4 space-y-4">
                    <h3 class="font-medium">"Filters"</h3>
                    <div class="grid grid-cols-2 gap-4">
                        <Input input_type="date" label="From" id="start_date" name="start_date" value=start_date />
                        <Input input_type="date" label="To" id="end_date" name="end_date" value=end_date />
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <FormSelect label="Grade" id="grade" name="grade" options=GRADE_OPTIONS />
                        <FormSelect
                            label="Risk Level"
                            id="risk_level"
                            name="risk_level"
                            options=RISK_LEVEL_OPTIONS
                        />
                    </div>
                    <Input
                        label="Business Type"
                        id="business_type"
                        name="business_type"
                        placeholder="e.g., Grocery Shop"
                        helper_text="Leave empty to include all business types"
                    />
                </div>

                <div class="flex justify-end space-x-3 pt-6 border-t">
                    <a href=cancel_href class=button_classes(ButtonVariant::Outline, ButtonSize::Default, "")>
                        "Cancel"
                    </a>
                    <Button button_type="submit" class="flex items-center gap-2">
                        <DownloadIcon />
                        "Generate Report"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

/// Result of a generator submission, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Generated {
        report: GeneratedReport,
        format: ReportFormat,
    },
    Failed(String),
}

/// Toast fragment for the generator's HTMX request.
///
/// A success also closes the dialog through an out-of-band swap; a failure
/// leaves it open.
#[component]
pub fn ReportToast(outcome: ReportOutcome) -> impl IntoView {
    match outcome {
        ReportOutcome::Generated { report, format } => {
            // PDFs open in a new tab as soon as htmx settles the toast
            let auto_open = (format == ReportFormat::Pdf)
                .then_some("window.open(this.dataset.downloadUrl, '_blank')");
            let download_url = report.download_url.clone();
            view! {
                <div
                    class="flex items-start gap-3 rounded-md border border-green-200 bg-green-50 p-4 text-sm text-green-800"
                    role="status"
                    data-report-id=report.report_id
                    data-download-url=download_url
                    hx-on--load=auto_open
                >
                    <CheckCircleIcon class="mt-0.5 h-5 w-5 text-green-600" />
                    <div class="flex-1">
                        <p class="font-medium">"Report generated successfully!"</p>
                        <a href=report.download_url target="_blank" rel="noopener" class="underline">
                            {format!("Download {}", format.label())}
                        </a>
                    </div>
                </div>
                <div id=DIALOG_REGION_ID hx-swap-oob="true"></div>
            }
            .into_any()
        }
        ReportOutcome::Failed(message) => view! {
            <div
                class="flex items-start gap-3 rounded-md border border-red-200 bg-red-50 p-4 text-sm text-red-800"
                role="alert"
            >
                <AlertCircleIcon class="mt-0.5 h-5 w-5 text-red-600" />
                <p class="flex-1">{message}</p>
                <XIcon class="h-4 w-4 text-red-400" />
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn page(query: ReportsQuery) -> String {
        render_html(move || view! { <ReportsPage query=query today=today() /> })
    }

    #[test]
    fn test_query_hrefs() {
        let query = ReportsQuery::default();
        assert_eq!(query.href(), "/reports");
        assert_eq!(query.with_dialog(true).href(), "/reports?dialog=open");

        let query = query.with_tab("formats").toggle_period_menu();
        assert_eq!(query.href(), "/reports?tab=formats&menu=period");
        assert_eq!(
            query.with_period("6m").href(),
            "/reports?tab=formats&period=6m"
        );
        assert!(!query.toggle_period_menu().period_menu_open());
    }

    #[test]
    fn test_period_menu_transitions() {
        let closed = ReportsQuery::default();
        let open = closed.toggle_period_menu();
        assert!(open.period_menu_open());
        assert_eq!(open.toggle_period_menu(), closed);

        // Picking a period closes the menu whether or not it was open
        assert!(!open.with_period("1y").period_menu_open());
        assert!(!closed.with_period("1y").period_menu_open());
        assert_eq!(open.with_period("1y").period(), "1y");
    }

    #[test]
    fn test_unknown_tab_falls_back() {
        let query = ReportsQuery::default().with_tab("bogus");
        assert_eq!(query.tab(), DEFAULT_TAB);

        let html = page(query);
        assert!(html.contains("Score Breakdown Report"));
        assert!(!html.contains("Excel Spreadsheet"));
    }

    #[test]
    fn test_unknown_period_falls_back() {
        let query = ReportsQuery {
            period: Some("5y".into()),
            ..ReportsQuery::default()
        };
        assert_eq!(query.period(), DEFAULT_PERIOD);
    }

    #[test]
    fn test_period_start() {
        assert_eq!(
            period_start("3m", today()),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(
            period_start("1y", today()),
            NaiveDate::from_ymd_opt(2023, 6, 15)
        );
        assert_eq!(period_start("2w", today()), None);
    }

    #[test]
    fn test_default_page_shows_types_tab_only() {
        let html = page(ReportsQuery::default());
        assert!(html.contains("Score Breakdown Report"));
        assert!(!html.contains("Excel Spreadsheet"));
        assert!(!html.contains("hx-post"));
        assert!(!html.contains("Last 6 Months"));
        assert!(html.contains("id=\"report-toast\""));
    }

    #[test]
    fn test_formats_tab() {
        let html = page(ReportsQuery::default().with_tab("formats"));
        assert!(html.contains("Excel Spreadsheet"));
        assert!(!html.contains("Score Breakdown Report"));
    }

    #[test]
    fn test_period_menu_lists_periods() {
        let html = page(ReportsQuery::default().toggle_period_menu());
        assert!(html.contains("Last 6 Months"));
        assert!(html.contains("href=\"/reports?period=6m\""));
    }

    #[test]
    fn test_dialog_open() {
        let html = page(ReportsQuery::default().with_dialog(true));
        assert!(html.contains("hx-post=\"/api/reports/generate\""));
        assert!(html.contains("hx-target=\"#report-toast\""));
        assert!(html.contains("Application IDs (comma-separated)"));
        assert!(html.contains("All Risk Levels"));
        assert!(html.contains("name=\"business_type\""));
        assert!(html.contains("placeholder=\"e.g., Grocery Shop\""));
        assert!(html.contains("value=\"2024-03-15\""));
        assert!(html.contains("value=\"2024-06-15\""));
        assert!(html.contains("href=\"/reports\""));
    }

    #[test]
    fn test_success_toast_closes_dialog() {
        let outcome = ReportOutcome::Generated {
            report: GeneratedReport {
                report_id: "r-42".into(),
                download_url: "/media/reports/r-42.pdf".into(),
            },
            format: ReportFormat::Pdf,
        };
        let html = render_html(move || view! { <ReportToast outcome=outcome /> });
        assert!(html.contains("Report generated successfully!"));
        assert!(html.contains("href=\"/media/reports/r-42.pdf\""));
        assert!(html.contains("Download PDF Document"));
        assert!(html.contains("hx-swap-oob=\"true\""));
        assert!(html.contains("data-download-url=\"/media/reports/r-42.pdf\""));
        assert!(html.contains("hx-on--load="));
    }

    #[test]
    fn test_non_pdf_toast_does_not_auto_open() {
        let outcome = ReportOutcome::Generated {
            report: GeneratedReport {
                report_id: "r-43".into(),
                download_url: "/media/reports/r-43.xlsx".into(),
            },
            format: ReportFormat::Excel,
        };
        let html = render_html(move || view! { <ReportToast outcome=outcome /> });
        assert!(html.contains("Download Excel Spreadsheet"));
        assert!(!html.contains("hx-on--load"));
    }

    #[test]
    fn test_error_toast_keeps_dialog() {
        let html = render_html(|| {
            view! { <ReportToast outcome=ReportOutcome::Failed("Failed to generate report".into()) /> }
        });
        assert!(html.contains("Failed to generate report"));
        assert!(!html.contains("hx-swap-oob"));
    }
}
