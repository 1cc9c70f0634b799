//! Badge components for status indicators and tags.
//!
//! [`Badge`] takes a typed variant. [`StatusBadge`] takes whatever status
//! string the scoring backend sent (application status, risk level or
//! grade) and resolves it through the same engine, so an unexpected value
//! degrades to the neutral style instead of failing.

use leptos::prelude::*;

use crate::ui::class_merge::tw_merge;
use crate::ui::variants::{VariantAxis, VariantKey, VariantSchema, VariantSelection, resolve};

const BADGE_AXES: &[VariantAxis] = &[VariantAxis::new(
    "variant",
    "default",
    &[
        ("default", "bg-blue-600 text-white"),
        ("secondary", "bg-gray-100 text-gray-900"),
        ("success", "bg-green-600 text-white"),
        ("warning", "bg-yellow-400 text-black"),
        ("destructive", "bg-red-600 text-white"),
        ("outline", "border border-gray-300 bg-transparent text-gray-900"),
    ],
)];

/// Option table for [`Badge`].
pub static BADGE_VARIANTS: VariantSchema = VariantSchema::new(
    "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold transition-colors",
    BADGE_AXES,
);

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default badge style.
    #[default]
    Default,
    /// Muted badge.
    Secondary,
    /// Success/positive badge.
    Success,
    /// Warning badge.
    Warning,
    /// Error/destructive badge.
    Destructive,
    /// Outline badge.
    Outline,
}

impl VariantKey for BadgeVariant {
    const AXIS: &'static str = "variant";

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

/// Badge component for displaying status or labels.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Success>"PDF"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let selection = VariantSelection::new().with_key(variant).class(class);
    let classes = tw_merge(&resolve(&BADGE_VARIANTS, &selection));

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}

/// Status key and style, keyed the way the scoring API spells them.
const STATUS_OPTIONS: &[(&str, &str)] = &[
    // Application statuses
    ("pending", "bg-yellow-100 text-yellow-800"),
    ("processing", "bg-blue-100 text-blue-800"),
    ("completed", "bg-green-100 text-green-800"),
    ("rejected", "bg-red-100 text-red-800"),
    // Risk levels
    ("low", "bg-green-100 text-green-800"),
    ("medium", "bg-yellow-100 text-yellow-800"),
    ("high", "bg-orange-100 text-orange-800"),
    ("very_high", "bg-red-100 text-red-800"),
    // Grades
    ("A", "bg-green-100 text-green-800"),
    ("B", "bg-blue-100 text-blue-800"),
    ("C", "bg-yellow-100 text-yellow-800"),
    ("R", "bg-red-100 text-red-800"),
    ("unknown", "bg-gray-100 text-gray-600"),
];

/// Display labels for the known statuses.
const STATUS_LABELS: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("processing", "Processing"),
    ("completed", "Completed"),
    ("rejected", "Rejected"),
    ("low", "Low Risk"),
    ("medium", "Medium Risk"),
    ("high", "High Risk"),
    ("very_high", "Very High Risk"),
    ("A", "Grade A"),
    ("B", "Grade B"),
    ("C", "Grade C"),
    ("R", "Grade R"),
];

const STATUS_AXES: &[VariantAxis] = &[VariantAxis::new("status", "unknown", STATUS_OPTIONS)];

/// Option table for [`StatusBadge`].
pub static STATUS_BADGE_VARIANTS: VariantSchema = VariantSchema::new(
    "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium",
    STATUS_AXES,
);

/// Display label for a known status.
#[must_use]
pub fn status_label(status: &str) -> Option<&'static str> {
    STATUS_LABELS
        .iter()
        .find(|(key, _)| *key == status)
        .map(|(_, label)| *label)
}

/// Class string for a status badge. Unknown statuses get the neutral style.
#[must_use]
pub fn status_badge_classes(status: &str, class: &str) -> String {
    let selection = VariantSelection::new().with("status", status).class(class);
    tw_merge(&resolve(&STATUS_BADGE_VARIANTS, &selection))
}

/// Badge for a loosely typed status, risk level or grade.
///
/// Unknown values keep the raw text as their label.
#[component]
pub fn StatusBadge(
    /// Status key as returned by the scoring API.
    #[prop(into)]
    status: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = status_badge_classes(&status, class);
    let label = status_label(&status).map_or(status, str::to_string);

    view! { <span class=classes>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_every_labelled_status_has_a_style() {
        let axis = STATUS_BADGE_VARIANTS.axis("status").unwrap();
        let neutral = axis.fragment("unknown").unwrap();
        for (key, _) in STATUS_LABELS {
            let style = axis.fragment(key).unwrap();
            assert_ne!(style, neutral, "{key} falls back to the neutral style");
        }
        assert_eq!(axis.keys().count(), STATUS_LABELS.len() + 1);
    }

    #[test]
    fn test_known_status() {
        let classes = status_badge_classes("very_high", "");
        assert!(classes.contains("bg-red-100 text-red-800"));
        assert_eq!(status_label("very_high"), Some("Very High Risk"));
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let classes = status_badge_classes("VERY HIGH", "");
        assert!(classes.contains("bg-gray-100 text-gray-600"));
        assert_eq!(status_label("VERY HIGH"), None);

        let html = render_html(|| view! { <StatusBadge status="VERY HIGH" /> });
        assert!(html.contains("VERY HIGH"));
    }

    #[test]
    fn test_grade_badge_renders_label() {
        let html = render_html(|| view! { <StatusBadge status="A" class="ml-2" /> });
        assert!(html.contains("Grade A"));
        assert!(html.contains("ml-2"));
    }

    #[test]
    fn test_badge_override_merges() {
        let html = render_html(|| {
            view! { <Badge variant=BadgeVariant::Outline class="text-blue-600">"PDF"</Badge> }
        });
        assert!(html.contains("text-blue-600"));
        assert!(!html.contains("text-gray-900"));
    }
}
