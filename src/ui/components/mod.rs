//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable UI components inspired by
//! shadcn/ui, rendered via Leptos SSR. Class strings for primitives with
//! options come from the variant engine in [`crate::ui::variants`].
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants, sizes and a loading state
//! - [`Badge`], [`StatusBadge`]: Tags and loosely typed status badges
//! - [`Card`] and its sections: Card container
//! - [`Input`], [`FormSelect`]: Labelled form fields
//! - [`Modal`]: Overlay dialog
//! - [`Select`] and its pieces: Compound dropdown sharing state implicitly
//! - [`Tabs`] and its pieces: Compound tab set sharing state implicitly
//! - [`icons`]: SVG icon components

mod badge;
mod button;
mod card;
pub mod icons;
mod input;
mod modal;
mod select;
mod tabs;

pub use badge::{
    BADGE_VARIANTS, Badge, BadgeVariant, STATUS_BADGE_VARIANTS, StatusBadge,
    status_badge_classes, status_label,
};
pub use button::{BUTTON_VARIANTS, Button, ButtonSize, ButtonVariant, button_classes};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use icons::*;
pub use input::{FormSelect, Input};
pub use modal::{MODAL_VARIANTS, Modal, ModalSize};
pub use select::{Select, SelectContent, SelectItem, SelectTrigger, SelectValue};
pub use tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
