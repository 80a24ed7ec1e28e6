//! mymonad theme controller
//!
//! Light/dark theme switching for the mymonad site:
//! - Explicit preference persisted in the browser's local storage
//! - OS `prefers-color-scheme` as the fallback, followed live while no
//!   preference is stored
//! - `data-theme` on the document root plus sun/moon icon state on the toggle
//!
//! The controller is generic over its storage, color-scheme and page
//! collaborators; [`web`] wires the browser implementations up on wasm32.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod store;
pub mod surface;
pub mod system;
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::{Result, ThemeError};
pub use store::{MemoryStore, PreferenceStore};
pub use surface::{Icon, MemoryPage, ThemeSurface};
pub use system::{ColorSchemeSource, FixedScheme};
pub use theme::Theme;
