//! Owner-scoped state shared by compound components.
//!
//! A compound widget (`Select`, `Tabs`) is assembled from pieces that never
//! receive each other as props. The root creates a state handle and provides
//! it to its subtree; every structural piece looks it up from the reactive
//! owner tree. The root provides through a scoping `Provider`, so the handle
//! is visible to its descendants and to no sibling subtree.
//!
//! Looking a handle up outside its root is a programmer error. The lookup
//! returns [`MissingContextError`]; the `use_*` helpers used by components
//! turn that into a panic so the misuse fails loudly during development.

use std::fmt;

use leptos::callback::Callable;
use leptos::prelude::*;

/// A compound-component piece was rendered outside its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("<{component}> must be used within <{root}>")]
pub struct MissingContextError {
    /// The piece that attempted the lookup.
    pub component: &'static str,
    /// The root it must be nested in.
    pub root: &'static str,
}

fn lookup<T: Clone + 'static>(
    component: &'static str,
    root: &'static str,
) -> Result<T, MissingContextError> {
    use_context::<T>().ok_or(MissingContextError { component, root })
}

// ─────────────────────────────────────────────────────────────────────────────
// Select
// ─────────────────────────────────────────────────────────────────────────────

/// Visibility of the select's option surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectPhase {
    /// Options hidden.
    #[default]
    Closed,
    /// Options visible.
    Open,
}

/// Interaction delivered to a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// The trigger was activated.
    TriggerClicked,
    /// The option with this key was activated.
    ItemSelected(String),
}

impl SelectPhase {
    /// Phase for an open flag.
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Whether the option surface is visible.
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Transition table.
    ///
    /// The trigger toggles; selecting an item always closes. There is no
    /// transition for clicks outside the select.
    #[must_use]
    pub fn next(self, event: &SelectEvent) -> Self {
        match (self, event) {
            (Self::Closed, SelectEvent::TriggerClicked) => Self::Open,
            (Self::Open, SelectEvent::TriggerClicked) | (_, SelectEvent::ItemSelected(_)) => {
                Self::Closed
            }
        }
    }
}

/// Shared state of one `Select` instance: selected key and open flag.
///
/// The handle is `Copy`; copies refer to the same underlying signals.
#[derive(Clone, Copy)]
pub struct SelectState {
    value: RwSignal<String>,
    open: RwSignal<bool>,
    on_value_change: Option<Callback<String>>,
}

impl fmt::Debug for SelectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectState")
            .field("value", &self.value.get_untracked())
            .field("open", &self.open.get_untracked())
            .finish_non_exhaustive()
    }
}

impl SelectState {
    /// Root component name used in lookup errors.
    pub const ROOT: &'static str = "Select";

    /// New state owned by the current reactive owner.
    pub fn create(initial_value: impl Into<String>, initial_open: bool) -> Self {
        Self {
            value: RwSignal::new(initial_value.into()),
            open: RwSignal::new(initial_open),
            on_value_change: None,
        }
    }

    /// State whose value lives in a caller-owned signal (controlled usage).
    pub fn from_signal(value: RwSignal<String>) -> Self {
        Self {
            value,
            open: RwSignal::new(false),
            on_value_change: None,
        }
    }

    /// Invoke `callback` after every value change.
    #[must_use]
    pub fn with_on_value_change(mut self, callback: Option<Callback<String>>) -> Self {
        self.on_value_change = callback;
        self
    }

    /// Find the state provided by the nearest enclosing `Select`.
    pub fn from_scope(component: &'static str) -> Result<Self, MissingContextError> {
        lookup(component, Self::ROOT)
    }

    /// Currently selected key (tracked).
    pub fn get_value(&self) -> String {
        self.value.get()
    }

    /// Replace the selected key and notify the change callback.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        self.value.set(value.clone());
        if let Some(callback) = &self.on_value_change {
            callback.run(value);
        }
    }

    /// Whether the option surface is visible (tracked).
    pub fn get_open(&self) -> bool {
        self.open.get()
    }

    /// Show or hide the option surface.
    pub fn set_open(&self, open: bool) {
        self.open.set(open);
    }

    /// Current phase, read without subscribing.
    pub fn phase(&self) -> SelectPhase {
        SelectPhase::from_open(self.open.get_untracked())
    }

    /// Whether `key` is the selected key (tracked).
    pub fn is_selected(&self, key: &str) -> bool {
        self.value.with(|value| value == key)
    }

    /// Apply an interaction. A selected item's value is stored before the
    /// phase transition is applied.
    pub fn dispatch(&self, event: SelectEvent) {
        let next = self.phase().next(&event);
        if let SelectEvent::ItemSelected(key) = event {
            self.set_value(key);
        }
        self.set_open(next.is_open());
    }
}

/// Select state for `component`, panicking when rendered outside a `Select`.
pub fn use_select(component: &'static str) -> SelectState {
    SelectState::from_scope(component).unwrap_or_else(|err| panic!("{err}"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tabs
// ─────────────────────────────────────────────────────────────────────────────

/// Shared state of one `Tabs` instance: the active tab key.
#[derive(Clone, Copy)]
pub struct TabsState {
    value: RwSignal<String>,
    on_value_change: Option<Callback<String>>,
}

impl fmt::Debug for TabsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsState")
            .field("value", &self.value.get_untracked())
            .finish_non_exhaustive()
    }
}

impl TabsState {
    /// Root component name used in lookup errors.
    pub const ROOT: &'static str = "Tabs";

    /// New state owned by the current reactive owner.
    pub fn create(initial_value: impl Into<String>) -> Self {
        Self::from_signal(RwSignal::new(initial_value.into()))
    }

    /// State whose value lives in a caller-owned signal (controlled usage).
    pub fn from_signal(value: RwSignal<String>) -> Self {
        Self {
            value,
            on_value_change: None,
        }
    }

    /// Invoke `callback` after every tab change.
    #[must_use]
    pub fn with_on_value_change(mut self, callback: Option<Callback<String>>) -> Self {
        self.on_value_change = callback;
        self
    }

    /// Find the state provided by the nearest enclosing `Tabs`.
    pub fn from_scope(component: &'static str) -> Result<Self, MissingContextError> {
        lookup(component, Self::ROOT)
    }

    /// Active tab key (tracked).
    pub fn get_value(&self) -> String {
        self.value.get()
    }

    /// Activate the tab with key `value`.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        self.value.set(value.clone());
        if let Some(callback) = &self.on_value_change {
            callback.run(value);
        }
    }

    /// Whether `key` is the active tab (tracked).
    pub fn is_active(&self, key: &str) -> bool {
        self.value.with(|value| value == key)
    }
}

/// Tabs state for `component`, panicking when rendered outside `Tabs`.
pub fn use_tabs(component: &'static str) -> TabsState {
    TabsState::from_scope(component).unwrap_or_else(|err| panic!("{err}"))
}
