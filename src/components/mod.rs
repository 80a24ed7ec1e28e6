//! Shared Dioxus components.

mod theme_toggle;

pub use theme_toggle::{ThemeToggle, MANAGED_ATTRIBUTE};
