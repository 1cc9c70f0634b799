//! Modal dialog rendered as a fixed overlay.
//!
//! Open and close are navigation: the page decides `open` from its query
//! string and the close control links back to the page without it.

use leptos::prelude::*;

use super::icons::XIcon;
use crate::ui::class_merge::tw_merge;
use crate::ui::variants::{VariantAxis, VariantKey, VariantSchema, VariantSelection, resolve};

const MODAL_AXES: &[VariantAxis] = &[VariantAxis::new(
    "size",
    "md",
    &[
        ("sm", "max-w-md"),
        ("md", "max-w-lg"),
        ("lg", "max-w-2xl"),
        ("xl", "max-w-4xl"),
    ],
)];

/// Option table for the [`Modal`] panel.
pub static MODAL_VARIANTS: VariantSchema =
    VariantSchema::new("relative bg-white rounded-lg shadow-xl m-4 w-full", MODAL_AXES);

/// Maximum width of the modal panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl VariantKey for ModalSize {
    const AXIS: &'static str = "size";

    fn key(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

/// Modal dialog.
///
/// Renders nothing while closed.
#[component]
pub fn Modal(
    /// Whether the dialog is shown.
    open: bool,
    /// Heading; the header row (with the close link) is omitted when empty.
    #[prop(default = "")]
    title: &'static str,
    /// Where the close control and the backdrop navigate to.
    #[prop(into, default = "?".to_string())]
    close_href: String,
    /// Panel width.
    #[prop(default = ModalSize::Md)]
    size: ModalSize,
    /// Additional CSS classes for the panel.
    #[prop(default = "")]
    class: &'static str,
    /// Dialog body.
    children: Children,
) -> impl IntoView {
    if !open {
        return None;
    }

    let selection = VariantSelection::new().with_key(size).class(class);
    let panel_classes = tw_merge(&resolve(&MODAL_VARIANTS, &selection));
    let header_close = close_href.clone();

    Some(view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center" role="dialog" aria-modal="true">
            <a href=close_href class="fixed inset-0 bg-black bg-opacity-50" aria-label="Close"></a>
            <div class=panel_classes>
                {(!title.is_empty())
                    .then(|| {
                        view! {
                            <div class="flex items-center justify-between p-6 border-b border-gray-200">
                                <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                                <a
                                    href=header_close
                                    class="text-gray-400 hover:text-gray-600 transition-colors"
                                    aria-label="Close"
                                >
                                    <XIcon class="h-5 w-5" />
                                </a>
                            </div>
                        }
                    })}
                <div class="p-6">{children()}</div>
            </div>
        </div>
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_closed_modal_renders_nothing() {
        let html = render_html(|| view! { <Modal open=false title="Generate Report">"body"</Modal> });
        assert!(!html.contains("body"));
        assert!(!html.contains("dialog"));
    }

    #[test]
    fn test_open_modal_with_size() {
        let html = render_html(|| {
            view! {
                <Modal open=true title="Generate Report" size=ModalSize::Lg close_href="/reports">
                    "body"
                </Modal>
            }
        });
        assert!(html.contains("max-w-2xl"));
        assert!(!html.contains("max-w-lg"));
        assert!(html.contains("Generate Report"));
        assert!(html.contains("href=\"/reports\""));
        assert!(html.contains("body"));
    }
}
