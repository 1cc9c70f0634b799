//! Compound tabs: `Tabs`, `TabsList`, `TabsTrigger`, `TabsContent`.
//!
//! Inactive content is not rendered at all; switching tabs creates the
//! newly active content and disposes of the old one.

use leptos::context::Provider;
use leptos::prelude::*;

use crate::ui::class_merge::cn;
use crate::ui::context::{TabsState, use_tabs};

const TRIGGER_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-sm \
                            px-3 py-1.5 text-sm font-medium ring-offset-white transition-all \
                            focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-gray-400 focus-visible:ring-offset-2 \
                            disabled:pointer-events-none disabled:opacity-50";

const TRIGGER_ACTIVE: &str = "bg-white text-gray-950 shadow-sm";
const TRIGGER_INACTIVE: &str = "text-gray-600 hover:text-gray-900";

/// Tabs root.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Tabs default_value="types">
///         <TabsList>
///             <TabsTrigger value="types">"Report Types"</TabsTrigger>
///             <TabsTrigger value="formats">"Formats"</TabsTrigger>
///         </TabsList>
///         <TabsContent value="types">"..."</TabsContent>
///         <TabsContent value="formats">"..."</TabsContent>
///     </Tabs>
/// }
/// ```
#[component]
pub fn Tabs(
    /// Caller-owned active key.
    #[prop(optional)]
    value: Option<RwSignal<String>>,
    /// Initially active key when `value` is not given.
    #[prop(optional, into)]
    default_value: String,
    /// Called with the new key after every change.
    #[prop(optional, into)]
    on_value_change: Option<Callback<String>>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// List and content panels.
    children: Children,
) -> impl IntoView {
    let state = value
        .map_or_else(|| TabsState::create(default_value), TabsState::from_signal)
        .with_on_value_change(on_value_change);

    view! {
        <div class=cn(["w-full", class])>
            <Provider value=state>{children()}</Provider>
        </div>
    }
}

/// Row holding the triggers.
#[component]
pub fn TabsList(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// The [`TabsTrigger`]s.
    children: Children,
) -> impl IntoView {
    let classes = cn([
        "inline-flex h-10 items-center justify-center rounded-md bg-gray-100 p-1 text-gray-500",
        class,
    ]);

    view! {
        <div class=classes role="tablist">
            {children()}
        </div>
    }
}

/// Activates the tab `value`.
#[component]
pub fn TabsTrigger(
    /// Key of the tab this trigger activates.
    #[prop(into)]
    value: String,
    /// Render as a link to this URL instead of a button.
    #[prop(optional, into)]
    href: Option<String>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Trigger label.
    children: Children,
) -> impl IntoView {
    let state = use_tabs("TabsTrigger");
    let key = value.clone();
    let classes = move || {
        let tone = if state.is_active(&value) { TRIGGER_ACTIVE } else { TRIGGER_INACTIVE };
        cn([TRIGGER_BASE, tone, class])
    };

    match href {
        Some(href) => view! {
            <a href=href class=classes role="tab">
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class=classes
                role="tab"
                on:click=move |_| state.set_value(key.clone())
            >
                {children()}
            </button>
        }
        .into_any(),
    }
}

/// Content for the tab `value`; absent while another tab is active.
#[component]
pub fn TabsContent(
    /// Key of the tab that shows this content.
    #[prop(into)]
    value: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Panel content.
    children: ChildrenFn,
) -> impl IntoView {
    let state = use_tabs("TabsContent");
    let classes = cn([
        "mt-2 ring-offset-white focus-visible:outline-none focus-visible:ring-2 \
         focus-visible:ring-gray-400 focus-visible:ring-offset-2",
        class,
    ]);

    view! {
        <Show when=move || state.is_active(&value)>
            <div class=classes.clone() role="tabpanel">{children()}</div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    fn overview_details(active: RwSignal<String>) -> String {
        render_html(move || {
            view! {
                <Tabs value=active>
                    <TabsList>
                        <TabsTrigger value="overview">"Overview"</TabsTrigger>
                        <TabsTrigger value="details">"Details"</TabsTrigger>
                    </TabsList>
                    <TabsContent value="overview">"overview block"</TabsContent>
                    <TabsContent value="details">"details block"</TabsContent>
                </Tabs>
            }
        })
    }

    #[test]
    fn test_only_active_content_is_rendered() {
        Owner::new().with(|| {
            let active = RwSignal::new("overview".to_string());

            let html = overview_details(active);
            assert!(html.contains("overview block"));
            assert!(!html.contains("details block"));
            assert_eq!(html.matches("role=\"tabpanel\"").count(), 1);

            TabsState::from_signal(active).set_value("details");

            let html = overview_details(active);
            assert!(html.contains("details block"));
            assert!(!html.contains("overview block"));
        });
    }

    #[test]
    fn test_active_trigger_styling() {
        Owner::new().with(|| {
            let html = overview_details(RwSignal::new("details".to_string()));
            assert_eq!(html.matches(TRIGGER_ACTIVE).count(), 1);
            assert_eq!(html.matches(TRIGGER_INACTIVE).count(), 1);
        });
    }

    #[test]
    fn test_uncontrolled_default_and_links() {
        let html = render_html(|| {
            view! {
                <Tabs default_value="formats" class="mt-4">
                    <TabsList>
                        <TabsTrigger value="types" href="?tab=types">"Report Types"</TabsTrigger>
                    </TabsList>
                    <TabsContent value="formats">"formats panel"</TabsContent>
                </Tabs>
            }
        });
        assert!(html.contains("w-full mt-4"));
        assert!(html.contains("href=\"?tab=types\""));
        assert!(html.contains("formats panel"));
    }

    #[test]
    #[should_panic(expected = "<TabsContent> must be used within <Tabs>")]
    fn test_content_outside_tabs_panics() {
        render_html(|| view! { <TabsContent value="overview">"orphan"</TabsContent> });
    }
}
