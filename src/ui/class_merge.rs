//! Utility-class joining and conflict merging.
//!
//! [`cn`] is the helper every component uses to build its `class`
//! attribute: it joins the non-empty inputs and hands them to [`tw_merge`],
//! which drops earlier utilities overridden by a later one of the same
//! property family (`px-4 ... px-2` keeps `px-2`). Modifier prefixes
//! (`hover:`, `focus-visible:`, `md:`) are part of the conflict key, so
//! `bg-white hover:bg-gray-50` never collide.

use std::collections::HashSet;

/// Join class inputs and merge conflicting utilities, last one wins.
///
/// # Example
///
/// ```rust
/// use credit_scoring_ui::ui::class_merge::cn;
///
/// assert_eq!(cn(["px-4 py-2", "", "px-2"]), "py-2 px-2");
/// ```
pub fn cn<'a>(inputs: impl IntoIterator<Item = &'a str>) -> String {
    let joined = inputs
        .into_iter()
        .filter(|input| !input.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    tw_merge(&joined)
}

/// Merge a whitespace-separated class list.
///
/// Scans right to left; the first token seen for a (modifiers, family) key
/// is kept, earlier ones are dropped. A kept family also claims the
/// narrower families it covers (`p` covers `px`, `pt`, ...), but not the
/// other way round. Unrecognised tokens are kept unless exactly repeated.
#[must_use]
pub fn tw_merge(classes: &str) -> String {
    let mut claimed: HashSet<(&str, &str)> = HashSet::new();
    let mut seen_exact: HashSet<&str> = HashSet::new();
    let mut kept = Vec::new();

    for token in classes.split_whitespace().rev() {
        let (modifiers, utility) = split_modifiers(token);
        match family(utility) {
            Some(family) => {
                if claimed.contains(&(modifiers, family)) {
                    continue;
                }
                claimed.insert((modifiers, family));
                for &covered in covered_families(family) {
                    claimed.insert((modifiers, covered));
                }
                kept.push(token);
            }
            None => {
                if seen_exact.insert(token) {
                    kept.push(token);
                }
            }
        }
    }

    kept.reverse();
    kept.join(" ")
}

/// Split `hover:md:bg-red-50` into (`hover:md:`, `bg-red-50`).
///
/// Arbitrary values (`supports-[backdrop-filter]:bg-x`) may contain colons
/// inside brackets; those are not treated as separators.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split_at = None;
    for (idx, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split_at = Some(idx + 1),
            _ => {}
        }
    }
    match split_at {
        Some(idx) => token.split_at(idx),
        None => ("", token),
    }
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const ROUNDED_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BG_SIZES: &[&str] = &["auto", "cover", "contain"];
const BG_ATTACHMENTS: &[&str] = &["fixed", "local", "scroll"];
const BG_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];

/// Spacing prefixes, longest first so `px-` wins over `p-`.
const SPACING: &[(&str, &str)] = &[
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
];

/// Plain prefix families.
const PREFIXED: &[(&str, &str)] = &[
    ("min-h-", "min-h"),
    ("min-w-", "min-w"),
    ("max-h-", "max-h"),
    ("max-w-", "max-w"),
    ("h-", "h"),
    ("w-", "w"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("opacity-", "opacity"),
    ("z-", "z"),
    ("items-", "align-items"),
    ("justify-", "justify-content"),
    ("cursor-", "cursor"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("whitespace-", "whitespace"),
    ("underline-offset-", "underline-offset"),
];

fn family(utility: &str) -> Option<&'static str> {
    let utility = utility.strip_prefix('!').unwrap_or(utility);
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    if let Some(family) = SPACING
        .iter()
        .chain(PREFIXED)
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, family)| *family)
    {
        return Some(family);
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&rest) {
            "font-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        return Some(background_family(rest));
    }
    if utility == "rounded" {
        return Some("rounded");
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        return ROUNDED_SIZES.contains(&rest).then_some("rounded");
    }
    if utility == "border" {
        return Some("border-width");
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        if is_numeric(rest) {
            return Some("border-width");
        }
        if BORDER_STYLES.contains(&rest) {
            return Some("border-style");
        }
        // Side-specific borders (border-t, border-x-2, ...) are left alone.
        if matches!(rest.split('-').next(), Some("t" | "r" | "b" | "l" | "x" | "y")) {
            return None;
        }
        return Some("border-color");
    }
    if utility == "shadow" {
        return Some("shadow");
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&rest) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if utility == "ring" {
        return Some("ring-width");
    }
    if let Some(rest) = utility.strip_prefix("ring-offset-") {
        return Some(if is_numeric(rest) {
            "ring-offset-width"
        } else {
            "ring-offset-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("ring-") {
        return Some(if is_numeric(rest) {
            "ring-width"
        } else {
            "ring-color"
        });
    }
    if utility == "transition" || utility.starts_with("transition-") {
        return Some("transition");
    }
    if utility == "outline" {
        return Some("outline-style");
    }
    if let Some(rest) = utility.strip_prefix("outline-") {
        return Some(if rest.starts_with("offset-") {
            "outline-offset"
        } else if is_numeric(rest) {
            "outline-width"
        } else if rest == "none" || BORDER_STYLES.contains(&rest) {
            "outline-style"
        } else {
            "outline-color"
        });
    }
    None
}

/// `bg-*` sets one of several background properties; only a colour
/// overrides a colour.
fn background_family(rest: &str) -> &'static str {
    if rest.starts_with("opacity-") {
        "bg-opacity"
    } else if rest == "none" || rest.starts_with("gradient-") {
        "bg-image"
    } else if BG_SIZES.contains(&rest) {
        "bg-size"
    } else if BG_ATTACHMENTS.contains(&rest) {
        "bg-attachment"
    } else if BG_POSITIONS.contains(&rest) {
        "bg-position"
    } else if rest == "repeat" || rest == "no-repeat" || rest.starts_with("repeat-") {
        "bg-repeat"
    } else if rest.starts_with("clip-") {
        "bg-clip"
    } else if rest.starts_with("origin-") {
        "bg-origin"
    } else {
        "bg-color"
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn covered_families(family: &str) -> &'static [&'static str] {
    match family {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_of_family_wins() {
        assert_eq!(tw_merge("px-2 py-1 px-4"), "py-1 px-4");
        assert_eq!(tw_merge("bg-white text-gray-900 bg-blue-600"), "text-gray-900 bg-blue-600");
    }

    #[test]
    fn test_wider_family_overrides_narrower() {
        assert_eq!(tw_merge("px-2 py-1 p-3"), "p-3");
        assert_eq!(tw_merge("p-3 px-2"), "p-3 px-2");
    }

    #[test]
    fn test_modifiers_are_separate_keys() {
        assert_eq!(
            tw_merge("bg-white hover:bg-gray-50 bg-blue-600 hover:bg-blue-700"),
            "bg-blue-600 hover:bg-blue-700"
        );
        assert_eq!(
            tw_merge("focus-visible:ring-2 ring-1"),
            "focus-visible:ring-2 ring-1"
        );
    }

    #[test]
    fn test_text_size_and_color_do_not_collide() {
        assert_eq!(tw_merge("text-sm text-red-600 text-lg"), "text-red-600 text-lg");
        assert_eq!(tw_merge("text-center text-gray-900"), "text-center text-gray-900");
    }

    #[test]
    fn test_ring_offset_width_and_color() {
        assert_eq!(tw_merge("ring-offset-2 ring-offset-white"), "ring-offset-2 ring-offset-white");
        assert_eq!(tw_merge("ring-offset-2 ring-offset-4"), "ring-offset-4");
        assert_eq!(tw_merge("ring-2 ring-offset-2 ring-blue-500"), "ring-2 ring-offset-2 ring-blue-500");
    }

    #[test]
    fn test_background_properties_are_separate() {
        assert_eq!(tw_merge("bg-white bg-gradient-to-br"), "bg-white bg-gradient-to-br");
        assert_eq!(tw_merge("bg-cover bg-center bg-blue-50"), "bg-cover bg-center bg-blue-50");
        assert_eq!(tw_merge("bg-gradient-to-r bg-gradient-to-br"), "bg-gradient-to-br");
        assert_eq!(tw_merge("bg-white bg-gray-50"), "bg-gray-50");
    }

    #[test]
    fn test_shadow_size_and_color() {
        assert_eq!(tw_merge("shadow-lg shadow-blue-500"), "shadow-lg shadow-blue-500");
        assert_eq!(tw_merge("shadow-sm shadow-xl"), "shadow-xl");
        assert_eq!(tw_merge("shadow shadow-none"), "shadow-none");
    }

    #[test]
    fn test_outline_properties() {
        assert_eq!(tw_merge("outline-none outline-blue-500"), "outline-none outline-blue-500");
        assert_eq!(tw_merge("outline outline-dashed"), "outline-dashed");
    }

    #[test]
    fn test_display_conflict() {
        assert_eq!(tw_merge("inline-flex items-center flex gap-2"), "items-center flex gap-2");
    }

    #[test]
    fn test_border_width_and_color() {
        assert_eq!(
            tw_merge("border border-gray-300 border-red-500"),
            "border border-red-500"
        );
        assert_eq!(tw_merge("border-t border-b"), "border-t border-b");
    }

    #[test]
    fn test_unknown_tokens_keep_order_and_dedupe_exact() {
        assert_eq!(tw_merge("animate-spin  report-toast animate-spin"), "report-toast animate-spin");
    }

    #[test]
    fn test_arbitrary_variant_brackets() {
        assert_eq!(
            split_modifiers("supports-[backdrop-filter:blur]:bg-background/60"),
            ("supports-[backdrop-filter:blur]:", "bg-background/60")
        );
    }

    #[test]
    fn test_cn_skips_empty_inputs() {
        assert_eq!(cn(["rounded-md", "", "   ", "rounded-full"]), "rounded-full");
        let none: [&str; 0] = [];
        assert_eq!(cn(none), "");
    }
}
