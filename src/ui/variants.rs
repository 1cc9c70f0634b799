//! Style-variant resolution.
//!
//! A [`VariantSchema`] describes the visual option space of one primitive:
//! a fixed base fragment plus a list of independent axes (`variant`, `size`,
//! ...), each mapping option keys to class fragments and naming a default.
//! [`resolve`] folds a caller's [`VariantSelection`] over that table into a
//! single class string.
//!
//! Resolution never fails. Unknown axis keys fall back to the axis default,
//! which matters because selections are often driven by loosely typed data
//! (a risk grade coming back from a report, for example).
//!
//! # Example
//!
//! ```rust
//! use credit_scoring_ui::ui::variants::{VariantAxis, VariantSchema, VariantSelection, resolve};
//!
//! const CHIP_AXES: &[VariantAxis] = &[VariantAxis::new(
//!     "tone",
//!     "plain",
//!     &[("plain", "bg-gray-100"), ("alert", "bg-red-100")],
//! )];
//! static CHIP: VariantSchema = VariantSchema::new("inline-flex rounded", CHIP_AXES);
//!
//! let classes = resolve(&CHIP, &VariantSelection::new().with("tone", "alert").class("mt-2"));
//! assert_eq!(classes, "inline-flex rounded bg-red-100 mt-2");
//! ```

use std::collections::HashMap;

/// One independent dimension of visual variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantAxis {
    name: &'static str,
    default: &'static str,
    options: &'static [(&'static str, &'static str)],
}

impl VariantAxis {
    /// Declare an axis with its default key and `(key, fragment)` options.
    #[must_use]
    pub const fn new(
        name: &'static str,
        default: &'static str,
        options: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            default,
            options,
        }
    }

    /// Axis name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Key used when a selection leaves this axis unset or names an unknown key.
    #[must_use]
    pub const fn default_key(&self) -> &'static str {
        self.default
    }

    /// Option keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|(key, _)| *key)
    }

    /// Fragment for `key`, if the axis declares it.
    #[must_use]
    pub fn fragment(&self, key: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, fragment)| *fragment)
    }

    /// Fragment for `key`, or the default fragment when `key` is absent or unknown.
    #[must_use]
    pub fn fragment_or_default(&self, key: Option<&str>) -> &'static str {
        key.and_then(|k| self.fragment(k))
            .or_else(|| self.fragment(self.default))
            .unwrap_or_default()
    }

    const fn declares(&self, key: &str) -> bool {
        let mut i = 0;
        while i < self.options.len() {
            if str_eq(self.options[i].0, key) {
                return true;
            }
            i += 1;
        }
        false
    }
}

/// Errors raised while building a schema at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// An axis default does not name one of its options.
    #[error("axis `{axis}` defaults to `{key}`, which is not one of its options")]
    UnknownDefault {
        /// Offending axis.
        axis: &'static str,
        /// The missing default key.
        key: &'static str,
    },

    /// Two axes share a name.
    #[error("axis `{axis}` is declared more than once")]
    DuplicateAxis {
        /// Repeated axis name.
        axis: &'static str,
    },
}

/// Static option table for one visual primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSchema {
    base: &'static str,
    axes: &'static [VariantAxis],
}

impl VariantSchema {
    /// Build a schema, checking it at compile time when used in a `static`.
    ///
    /// # Panics
    ///
    /// Panics (a compile error in const context) if an axis default is not
    /// one of its options or an axis name repeats.
    #[must_use]
    pub const fn new(base: &'static str, axes: &'static [VariantAxis]) -> Self {
        match Self::validate(axes) {
            Ok(()) => Self { base, axes },
            Err(SchemaError::UnknownDefault { .. }) => {
                panic!("variant schema axis default is not one of its options")
            }
            Err(SchemaError::DuplicateAxis { .. }) => {
                panic!("variant schema declares an axis twice")
            }
        }
    }

    /// Build a schema, reporting invalid tables as an error.
    pub const fn try_new(
        base: &'static str,
        axes: &'static [VariantAxis],
    ) -> Result<Self, SchemaError> {
        match Self::validate(axes) {
            Ok(()) => Ok(Self { base, axes }),
            Err(err) => Err(err),
        }
    }

    const fn validate(axes: &'static [VariantAxis]) -> Result<(), SchemaError> {
        let mut i = 0;
        while i < axes.len() {
            let axis = &axes[i];
            if !axis.declares(axis.default) {
                return Err(SchemaError::UnknownDefault {
                    axis: axis.name,
                    key: axis.default,
                });
            }
            let mut j = 0;
            while j < i {
                if str_eq(axes[j].name, axis.name) {
                    return Err(SchemaError::DuplicateAxis { axis: axis.name });
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }

    /// Fixed, axis-independent fragment.
    #[must_use]
    pub const fn base(&self) -> &'static str {
        self.base
    }

    /// Axes in declaration order.
    #[must_use]
    pub const fn axes(&self) -> &'static [VariantAxis] {
        self.axes
    }

    /// Look up an axis by name.
    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&'static VariantAxis> {
        self.axes.iter().find(|axis| axis.name == name)
    }
}

/// Enumerated option key bound to one schema axis.
///
/// Implemented by the typed variant enums so call sites get exhaustiveness
/// checking, while [`VariantSelection::with`] keeps accepting raw strings.
pub trait VariantKey: Copy {
    /// Axis this key selects on.
    const AXIS: &'static str;

    /// Option key within [`Self::AXIS`].
    fn key(self) -> &'static str;
}

/// Per-render choice of axis keys plus free-form class overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSelection {
    chosen: HashMap<String, String>,
    raw_override: Vec<String>,
}

impl VariantSelection {
    /// Empty selection: every axis at its default, no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `key` on `axis`. Later calls for the same axis replace earlier ones.
    #[must_use]
    pub fn with(mut self, axis: impl Into<String>, key: impl Into<String>) -> Self {
        self.chosen.insert(axis.into(), key.into());
        self
    }

    /// Choose a typed key.
    #[must_use]
    pub fn with_key<K: VariantKey>(self, key: K) -> Self {
        self.with(K::AXIS, key.key())
    }

    /// Append free-form classes after all axis fragments.
    #[must_use]
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        let classes = classes.into();
        if !classes.trim().is_empty() {
            self.raw_override.push(classes);
        }
        self
    }

    /// Key chosen for `axis`, if any.
    #[must_use]
    pub fn chosen(&self, axis: &str) -> Option<&str> {
        self.chosen.get(axis).map(String::as_str)
    }

    /// Override tokens in the order given.
    #[must_use]
    pub fn raw_override(&self) -> &[String] {
        &self.raw_override
    }
}

/// Resolve a selection against a schema into one class string.
///
/// Order is: base fragment, then each axis in declaration order, then the
/// raw overrides as given. Whitespace is collapsed to single spaces; no
/// deduplication or conflict merging happens here (see
/// [`tw_merge`](super::class_merge::tw_merge)).
#[must_use]
pub fn resolve(schema: &VariantSchema, selection: &VariantSelection) -> String {
    let axis_fragments = schema
        .axes
        .iter()
        .map(|axis| axis.fragment_or_default(selection.chosen(axis.name)));

    std::iter::once(schema.base)
        .chain(axis_fragments)
        .chain(selection.raw_override.iter().map(String::as_str))
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXES: &[VariantAxis] = &[
        VariantAxis::new(
            "variant",
            "default",
            &[
                ("default", "bg-blue-600 text-white"),
                ("outline", "border border-gray-300 bg-white"),
            ],
        ),
        VariantAxis::new(
            "size",
            "default",
            &[("default", "h-10 py-2 px-4"), ("sm", "h-9 px-3")],
        ),
    ];

    static BUTTON: VariantSchema = VariantSchema::new("inline-flex items-center", AXES);

    #[test]
    fn test_button_scenario() {
        let selection = VariantSelection::new()
            .with("variant", "outline")
            .class("flex")
            .class("gap-2");
        let out = resolve(&BUTTON, &selection);

        assert!(out.contains("border border-gray-300 bg-white"));
        assert!(out.contains("h-10 py-2 px-4"));
        assert!(!out.contains("bg-blue-600"));
        assert!(out.ends_with("flex gap-2"));
    }

    #[test]
    fn test_defaults_when_unset() {
        let out = resolve(&BUTTON, &VariantSelection::new());
        assert_eq!(out, "inline-flex items-center bg-blue-600 text-white h-10 py-2 px-4");
    }

    #[test]
    fn test_unknown_key_same_as_absent() {
        let unknown = resolve(&BUTTON, &VariantSelection::new().with("size", "huge"));
        let absent = resolve(&BUTTON, &VariantSelection::new());
        assert_eq!(unknown, absent);
    }

    #[test]
    fn test_unknown_axis_is_ignored() {
        let out = resolve(&BUTTON, &VariantSelection::new().with("tone", "loud"));
        assert_eq!(out, resolve(&BUTTON, &VariantSelection::new()));
    }

    #[test]
    fn test_axes_are_independent() {
        let small = resolve(&BUTTON, &VariantSelection::new().with("size", "sm"));
        assert!(small.contains("bg-blue-600 text-white"));
        assert!(small.contains("h-9 px-3"));
    }

    #[test]
    fn test_deterministic() {
        let selection = VariantSelection::new()
            .with("variant", "outline")
            .with("size", "sm")
            .class("w-full");
        assert_eq!(
            resolve(&BUTTON, &selection),
            resolve(&BUTTON, &selection.clone())
        );
    }

    #[test]
    fn test_override_kept_verbatim_after_axes() {
        // Collides with the default variant fragment on purpose.
        let out = resolve(
            &BUTTON,
            &VariantSelection::new().class("bg-blue-600   mt-1"),
        );
        assert!(out.ends_with("h-10 py-2 px-4 bg-blue-600 mt-1"));
        assert_eq!(out.matches("bg-blue-600").count(), 2);
    }

    #[test]
    fn test_blank_override_is_dropped() {
        let selection = VariantSelection::new().class("   ");
        assert!(selection.raw_override().is_empty());
    }

    #[test]
    fn test_try_new_rejects_unknown_default() {
        static AXES: [VariantAxis; 1] = [VariantAxis::new("size", "xl", &[("sm", "h-9")])];
        assert_eq!(
            VariantSchema::try_new("", &AXES),
            Err(SchemaError::UnknownDefault {
                axis: "size",
                key: "xl"
            })
        );
    }

    #[test]
    fn test_try_new_rejects_duplicate_axis() {
        static AXES: [VariantAxis; 2] = [
            VariantAxis::new("size", "sm", &[("sm", "h-9")]),
            VariantAxis::new("size", "sm", &[("sm", "h-8")]),
        ];
        assert_eq!(
            VariantSchema::try_new("", &AXES),
            Err(SchemaError::DuplicateAxis { axis: "size" })
        );
    }
}
