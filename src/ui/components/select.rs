//! Compound select: `Select`, `SelectTrigger`, `SelectValue`,
//! `SelectContent`, `SelectItem`.
//!
//! The root owns a [`SelectState`] and provides it to its subtree; the
//! pieces find it through the owner tree rather than through props.
//!
//! Triggers and items can carry an `href`. They then render as links and
//! the page rebuilds the state from its query string, so the widget also
//! works when the markup is served without client-side hydration.

use leptos::context::Provider;
use leptos::prelude::*;

use super::icons::ChevronDownIcon;
use crate::ui::class_merge::cn;
use crate::ui::context::{SelectEvent, SelectState, use_select};

const TRIGGER_BASE: &str = "flex h-10 w-full items-center justify-between rounded-md border \
                            border-gray-300 bg-white px-3 py-2 text-sm focus:outline-none \
                            focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                            disabled:cursor-not-allowed disabled:opacity-50";

const CONTENT_BASE: &str = "absolute top-full left-0 z-50 w-full mt-1 bg-white border \
                            border-gray-300 rounded-md shadow-lg max-h-60 overflow-auto";

const ITEM_BASE: &str = "block px-3 py-2 text-sm cursor-pointer hover:bg-gray-100 focus:bg-gray-100";
const ITEM_SELECTED: &str = "bg-blue-50 text-blue-600";

/// Select root.
///
/// Pass `value` to control the selection from outside; otherwise the root
/// starts at `default_value`. With a non-empty `name`, a hidden input
/// mirrors the selected key so the value submits with an enclosing form.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Select default_value="3m" name="period">
///         <SelectTrigger class="w-32">
///             <SelectValue placeholder="Period" />
///         </SelectTrigger>
///         <SelectContent>
///             <SelectItem value="1m">"Last Month"</SelectItem>
///             <SelectItem value="3m">"Last 3 Months"</SelectItem>
///         </SelectContent>
///     </Select>
/// }
/// ```
#[component]
pub fn Select(
    /// Caller-owned selected key.
    #[prop(optional)]
    value: Option<RwSignal<String>>,
    /// Initial key when `value` is not given.
    #[prop(optional, into)]
    default_value: String,
    /// Render with the option surface open.
    #[prop(default = false)]
    default_open: bool,
    /// Called with the new key after every change.
    #[prop(optional, into)]
    on_value_change: Option<Callback<String>>,
    /// Name of the hidden form input; no input is rendered when empty.
    #[prop(default = "")]
    name: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Trigger and content.
    children: Children,
) -> impl IntoView {
    let state = value
        .map_or_else(
            || SelectState::create(default_value, false),
            SelectState::from_signal,
        )
        .with_on_value_change(on_value_change);
    state.set_open(default_open);

    let hidden = (!name.is_empty())
        .then(|| view! { <input type="hidden" name=name value=move || state.get_value() /> });

    view! {
        <div class=cn(["relative", class])>
            {hidden}
            <Provider value=state>{children()}</Provider>
        </div>
    }
}

/// Button (or link) that toggles the option surface.
#[component]
pub fn SelectTrigger(
    /// Render as a link to this URL instead of a button.
    #[prop(optional, into)]
    href: Option<String>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Usually a [`SelectValue`].
    children: Children,
) -> impl IntoView {
    let state = use_select("SelectTrigger");
    let classes = cn([TRIGGER_BASE, class]);

    match href {
        Some(href) => view! {
            <a href=href class=classes>
                {children()}
                <ChevronDownIcon class="opacity-50" />
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class=classes
                on:click=move |_| state.dispatch(SelectEvent::TriggerClicked)
            >
                {children()}
                <ChevronDownIcon class="opacity-50" />
            </button>
        }
        .into_any(),
    }
}

/// Selected key, or the placeholder while nothing is selected.
#[component]
pub fn SelectValue(
    /// Text shown for an empty selection.
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    let state = use_select("SelectValue");

    view! {
        <span>
            {move || {
                let value = state.get_value();
                if value.is_empty() { placeholder.to_string() } else { value }
            }}
        </span>
    }
}

/// Option surface. Its children exist only while the select is open.
#[component]
pub fn SelectContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// The [`SelectItem`]s.
    children: ChildrenFn,
) -> impl IntoView {
    let state = use_select("SelectContent");
    let classes = cn([CONTENT_BASE, class]);

    view! {
        <Show when=move || state.get_open()>
            <div class=classes.clone()>{children()}</div>
        </Show>
    }
}

/// One option. Activating it selects `value` and closes the select.
#[component]
pub fn SelectItem(
    /// Key stored in the select when this item is chosen.
    #[prop(into)]
    value: String,
    /// Render as a link to this URL instead of a clickable row.
    #[prop(optional, into)]
    href: Option<String>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Item label.
    children: Children,
) -> impl IntoView {
    let state = use_select("SelectItem");
    let key = value.clone();
    let classes = move || {
        let selected = if state.is_selected(&value) { ITEM_SELECTED } else { "" };
        cn([ITEM_BASE, selected, class])
    };

    match href {
        Some(href) => view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <div
                class=classes
                on:click=move |_| state.dispatch(SelectEvent::ItemSelected(key.clone()))
            >
                {children()}
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    fn period_select(open: bool) -> String {
        render_html(move || {
            view! {
                <Select default_value="3m" default_open=open name="period">
                    <SelectTrigger>
                        <SelectValue placeholder="Period" />
                    </SelectTrigger>
                    <SelectContent>
                        <SelectItem value="1m">"Last Month"</SelectItem>
                        <SelectItem value="3m">"Last 3 Months"</SelectItem>
                    </SelectContent>
                </Select>
            }
        })
    }

    #[test]
    fn test_closed_select_renders_no_items() {
        let html = period_select(false);
        assert!(html.contains("3m"));
        assert!(!html.contains("Last Month"));
        assert!(!html.contains("Last 3 Months"));
    }

    #[test]
    fn test_open_select_marks_selected_item() {
        let html = period_select(true);
        assert!(html.contains("Last Month"));
        assert!(html.contains("Last 3 Months"));
        assert_eq!(html.matches(ITEM_SELECTED).count(), 1);
    }

    #[test]
    fn test_hidden_input_mirrors_value() {
        let html = period_select(false);
        assert!(html.contains("type=\"hidden\""));
        assert!(html.contains("name=\"period\""));
        assert!(html.contains("value=\"3m\""));
    }

    #[test]
    fn test_placeholder_for_empty_value() {
        let html = render_html(|| {
            view! {
                <Select>
                    <SelectTrigger>
                        <SelectValue placeholder="Period" />
                    </SelectTrigger>
                </Select>
            }
        });
        assert!(html.contains("Period"));
        assert!(!html.contains("type=\"hidden\""));
    }

    #[test]
    fn test_controlled_value() {
        Owner::new().with(|| {
            let period = RwSignal::new("1y".to_string());
            let html = render_html(move || {
                view! {
                    <Select value=period>
                        <SelectTrigger href="?menu=period">
                            <SelectValue />
                        </SelectTrigger>
                    </Select>
                }
            });
            assert!(html.contains("1y"));
            assert!(html.contains("href=\"?menu=period\""));
        });
    }

    #[test]
    #[should_panic(expected = "<SelectItem> must be used within <Select>")]
    fn test_item_outside_select_panics() {
        render_html(|| view! { <SelectItem value="1m">"Last Month"</SelectItem> });
    }
}
