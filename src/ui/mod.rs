//! UI components and pages.
//!
//! Everything here renders server-side through Leptos. Interactivity that
//! needs the server (report submission) goes through HTMX attributes on the
//! rendered markup; the rest is expressed as links and query parameters.
//!
//! # Structure
//!
//! - [`variants`]: schema-driven class resolution for primitives
//! - [`class_merge`]: `cn` / `tw_merge` utility-class merging
//! - [`context`]: owner-scoped state for compound components
//! - [`components`]: reusable ShadCN-style UI components
//! - [`pages`]: full pages and the fragments the server swaps in

pub mod class_merge;
pub mod components;
pub mod context;
pub mod pages;
pub mod variants;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render a view to an HTML string under a fresh reactive owner.
///
/// The owner, and every signal created while rendering, is dropped when
/// this returns.
pub fn render_html<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// Wrap rendered page content in the document shell.
#[must_use]
pub fn render_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Credit scoring reports">
    <title>{title} - Credit Scoring</title>

    <script src="https://unpkg.com/htmx.org@2.0.8"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-gray-50 text-gray-900 antialiased">
    {content}
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_wraps_content() {
        let page = render_page("Reports", "<main>body</main>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Reports - Credit Scoring</title>"));
        assert!(page.contains("<main>body</main>"));
    }

    #[test]
    fn test_render_html_renders_view() {
        let html = render_html(|| view! { <p class="note">"hello"</p> });
        assert!(html.starts_with("<p class=\"note\">"));
        assert!(html.contains("hello"));
    }
}
