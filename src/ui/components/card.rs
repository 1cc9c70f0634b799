//! Card component with header, title, content, and footer.

use leptos::prelude::*;

use crate::ui::class_merge::cn;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card>
///         <CardHeader>
///             <CardTitle>"Score Breakdown"</CardTitle>
///             <CardDescription>"Detailed analysis of credit score components"</CardDescription>
///         </CardHeader>
///         <CardContent>
///             <p>"Content goes here"</p>
///         </CardContent>
///         <CardFooter>
///             <Button>"Action"</Button>
///         </CardFooter>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = cn([
        "rounded-lg border border-gray-200 bg-white text-gray-900 shadow-sm",
        class,
    ]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = cn(["flex flex-col space-y-1.5 p-6", class]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card title.
#[component]
pub fn CardTitle(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Title text.
    children: Children,
) -> impl IntoView {
    let classes = cn(["text-lg font-semibold leading-none tracking-tight", class]);

    view! {
        <h3 class=classes>
            {children()}
        </h3>
    }
}

/// Muted text under a card title.
#[component]
pub fn CardDescription(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Description text.
    children: Children,
) -> impl IntoView {
    let classes = cn(["text-sm text-gray-500", class]);

    view! {
        <p class=classes>
            {children()}
        </p>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = cn(["p-6 pt-0", class]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card footer section.
#[component]
pub fn CardFooter(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Footer content.
    children: Children,
) -> impl IntoView {
    let classes = cn(["flex items-center p-6 pt-0", class]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
