//! Configuration management
//!
//! Every field has a default matching the markup the site ships with, so an
//! empty override (`{}`) is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Name of the `<meta>` tag whose `content` may carry a JSON override.
pub const CONFIG_META_NAME: &str = "mymonad-theme-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Persistent store key holding the explicit preference
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Attribute set on the document root
    #[serde(default = "default_root_attribute")]
    pub root_attribute: String,

    #[serde(default = "default_toggle_selector")]
    pub toggle_selector: String,

    #[serde(default = "default_sun_selector")]
    pub sun_selector: String,

    #[serde(default = "default_moon_selector")]
    pub moon_selector: String,

    #[serde(default = "default_color_scheme_query")]
    pub color_scheme_query: String,
}

fn default_storage_key() -> String {
    "mymonad-theme".into()
}

fn default_root_attribute() -> String {
    "data-theme".into()
}

fn default_toggle_selector() -> String {
    ".theme-toggle".into()
}

fn default_sun_selector() -> String {
    ".icon-sun".into()
}

fn default_moon_selector() -> String {
    ".icon-moon".into()
}

fn default_color_scheme_query() -> String {
    "(prefers-color-scheme: dark)".into()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            root_attribute: default_root_attribute(),
            toggle_selector: default_toggle_selector(),
            sun_selector: default_sun_selector(),
            moon_selector: default_moon_selector(),
            color_scheme_query: default_color_scheme_query(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: ThemeConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("root_attribute", &self.root_attribute),
            ("toggle_selector", &self.toggle_selector),
            ("sun_selector", &self.sun_selector),
            ("moon_selector", &self.moon_selector),
            ("color_scheme_query", &self.color_scheme_query),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ThemeError::EmptyConfigField(name));
            }
        }
        Ok(())
    }
}
