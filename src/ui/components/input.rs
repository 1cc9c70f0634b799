//! Labelled form fields: text input and native select.

use leptos::prelude::*;

use super::icons::ChevronDownIcon;
use crate::ui::class_merge::cn;

const FIELD_BASE: &str = "flex h-10 w-full rounded-md border border-gray-300 bg-white px-3 py-2 \
                          text-sm focus:outline-none focus:ring-2 focus:ring-blue-500 \
                          focus:border-transparent disabled:cursor-not-allowed disabled:opacity-50";

const FIELD_ERROR: &str = "border-red-500 focus:ring-red-500";

fn field_classes(extra: &str, has_error: bool, class: &str) -> String {
    cn([
        FIELD_BASE,
        extra,
        if has_error { FIELD_ERROR } else { "" },
        class,
    ])
}

/// Label, error and helper text shared by the form fields.
#[component]
fn FieldFrame(
    label: &'static str,
    id: &'static str,
    error: Option<String>,
    helper_text: &'static str,
    children: Children,
) -> impl IntoView {
    let helper = (error.is_none() && !helper_text.is_empty())
        .then(|| view! { <p class="text-sm text-gray-600">{helper_text}</p> });

    view! {
        <div class="space-y-2">
            {(!label.is_empty())
                .then(|| view! { <label for=id class="text-sm font-medium text-gray-700">{label}</label> })}
            {children()}
            {error.map(|message| view! { <p class="text-sm text-red-600">{message}</p> })}
            {helper}
        </div>
    }
}

/// Text input component.
///
/// The helper text is hidden while an error is shown.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         label="Application IDs (comma-separated)"
///         name="application_ids"
///         placeholder="e.g., 1, 2, 3, 4"
///         helper_text="Leave empty to include all applications"
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, email, password, date, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Label shown above the field.
    #[prop(default = "")]
    label: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Initial value.
    #[prop(optional, into)]
    value: String,
    /// Validation message; switches the field to its error style.
    #[prop(optional, into)]
    error: Option<String>,
    /// Hint shown under the field when there is no error.
    #[prop(default = "")]
    helper_text: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let classes = field_classes("placeholder:text-gray-400", error.is_some(), class);

    view! {
        <FieldFrame label=label id=id error=error helper_text=helper_text>
            <input
                type=input_type
                class=classes
                placeholder=placeholder
                name=name
                id=id
                disabled=disabled
                required=required
                value=value
                autocomplete=autocomplete
            />
        </FieldFrame>
    }
}

/// Native `<select>` with a fixed option list.
///
/// Unlike the compound [`Select`](super::Select), this needs no shared
/// state and submits with a plain form.
#[component]
pub fn FormSelect(
    /// `(value, label)` pairs, in display order.
    options: &'static [(&'static str, &'static str)],
    /// Value of the initially selected option.
    #[prop(default = "")]
    selected: &'static str,
    /// Label shown above the field.
    #[prop(default = "")]
    label: &'static str,
    /// Select name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Select ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Whether the select is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Validation message; switches the field to its error style.
    #[prop(optional, into)]
    error: Option<String>,
    /// Hint shown under the field when there is no error.
    #[prop(default = "")]
    helper_text: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = field_classes("appearance-none", error.is_some(), class);

    view! {
        <FieldFrame label=label id=id error=error helper_text=helper_text>
            <div class="relative">
                <select class=classes name=name id=id disabled=disabled>
                    {options
                        .iter()
                        .map(|&(value, text)| {
                            view! {
                                <option value=value selected={value == selected}>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <ChevronDownIcon class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 pointer-events-none" />
            </div>
        </FieldFrame>
    }
}
