//! Button component with variants and sizes.

use leptos::prelude::*;

use super::icons::LoaderIcon;
use crate::ui::class_merge::tw_merge;
use crate::ui::variants::{VariantAxis, VariantKey, VariantSchema, VariantSelection, resolve};

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium \
                           transition-colors focus-visible:outline-none focus-visible:ring-2 \
                           focus-visible:ring-ring focus-visible:ring-offset-2 \
                           disabled:opacity-50 disabled:pointer-events-none ring-offset-background";

const BUTTON_AXES: &[VariantAxis] = &[
    VariantAxis::new(
        "variant",
        "default",
        &[
            ("default", "bg-blue-600 text-white hover:bg-blue-700"),
            ("destructive", "bg-red-600 text-white hover:bg-red-700"),
            ("outline", "border border-gray-300 bg-white hover:bg-gray-50 text-gray-900"),
            ("secondary", "bg-gray-100 text-gray-900 hover:bg-gray-200"),
            ("ghost", "hover:bg-gray-100 text-gray-900"),
            ("link", "underline-offset-4 hover:underline text-blue-600"),
        ],
    ),
    VariantAxis::new(
        "size",
        "default",
        &[
            ("default", "h-10 py-2 px-4"),
            ("sm", "h-9 px-3 rounded-md"),
            ("lg", "h-11 px-8 rounded-md"),
            ("icon", "h-10 w-10"),
        ],
    ),
];

/// Option table for [`Button`].
pub static BUTTON_VARIANTS: VariantSchema = VariantSchema::new(BUTTON_BASE, BUTTON_AXES);

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Default,
    /// Destructive action button.
    Destructive,
    /// Outline button.
    Outline,
    /// Secondary action button.
    Secondary,
    /// Subtle ghost button.
    Ghost,
    /// Link-style button.
    Link,
}

impl ButtonVariant {
    /// Every variant, in schema order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];
}

impl VariantKey for ButtonVariant {
    const AXIS: &'static str = "variant";

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Medium button (default).
    #[default]
    Default,
    /// Small button.
    Sm,
    /// Large button.
    Lg,
    /// Icon-only button.
    Icon,
}

impl ButtonSize {
    /// Every size, in schema order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Sm, Self::Lg, Self::Icon];
}

impl VariantKey for ButtonSize {
    const AXIS: &'static str = "size";

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

/// Resolve and merge the class string for a button.
#[must_use]
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    let selection = VariantSelection::new()
        .with_key(variant)
        .with_key(size)
        .class(class);
    tw_merge(&resolve(&BUTTON_VARIANTS, &selection))
}

/// ShadCN-style button component.
///
/// Event handlers are attached by the caller (`on:click=...`) and land on
/// the rendered `<button>`.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Outline size=ButtonSize::Sm class="flex gap-2">
///         "Cancel"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Default)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Default)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Show a spinner and disable the button.
    #[prop(default = false)]
    loading: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class);
    let is_disabled = disabled || loading;

    view! {
        <button type=button_type class=classes disabled=is_disabled>
            {loading.then(|| view! { <LoaderIcon class="-ml-1 mr-3" /> })}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_every_typed_key_is_declared() {
        let variant_axis = BUTTON_VARIANTS.axis(ButtonVariant::AXIS).unwrap();
        for variant in ButtonVariant::ALL {
            assert!(variant_axis.fragment(variant.key()).is_some(), "{variant:?}");
        }
        let size_axis = BUTTON_VARIANTS.axis(ButtonSize::AXIS).unwrap();
        for size in ButtonSize::ALL {
            assert!(size_axis.fragment(size.key()).is_some(), "{size:?}");
        }
        assert_eq!(variant_axis.keys().count(), ButtonVariant::ALL.len());
        assert_eq!(size_axis.keys().count(), ButtonSize::ALL.len());
    }

    #[test]
    fn test_outline_with_layout_override() {
        let selection = VariantSelection::new()
            .with_key(ButtonVariant::Outline)
            .class("flex gap-2");
        let raw = resolve(&BUTTON_VARIANTS, &selection);

        assert!(raw.contains("border border-gray-300 bg-white hover:bg-gray-50 text-gray-900"));
        assert!(raw.contains("h-10 py-2 px-4"));
        assert!(raw.ends_with("flex gap-2"));
    }

    #[test]
    fn test_merged_classes_drop_overridden_display() {
        let classes = button_classes(ButtonVariant::Default, ButtonSize::Default, "flex gap-2");
        assert!(!classes.split(' ').any(|c| c == "inline-flex"));
        assert!(classes.ends_with("flex gap-2"));
    }

    #[test]
    fn test_icon_size_keeps_default_variant() {
        let classes = button_classes(ButtonVariant::default(), ButtonSize::Icon, "");
        assert!(classes.contains("bg-blue-600"));
        assert!(classes.contains("h-10 w-10"));
    }

    #[test]
    fn test_renders_loading_button_disabled() {
        let html = render_html(|| view! { <Button loading=true>"Generate Report"</Button> });
        assert!(html.contains("disabled"));
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Generate Report"));
    }
}
