//! Document-backed [`ThemeSurface`] and page config lookup.

use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

use super::js_message;
use crate::config::{ThemeConfig, CONFIG_META_NAME};
use crate::error::{Result, ThemeError};
use crate::surface::{display_value, Icon, ThemeSurface};

pub struct DomSurface {
    document: Document,
    toggle_selector: String,
    sun_selector: String,
    moon_selector: String,
}

impl DomSurface {
    pub fn new(document: Document, config: &ThemeConfig) -> Self {
        Self {
            document,
            toggle_selector: config.toggle_selector.clone(),
            sun_selector: config.sun_selector.clone(),
            moon_selector: config.moon_selector.clone(),
        }
    }

    /// The toggle control, looked up fresh on every call.
    pub fn toggle_element(&self) -> Result<Option<Element>> {
        self.document
            .query_selector(&self.toggle_selector)
            .map_err(|e| ThemeError::Dom(js_message(&e)))
    }

    fn icon_selector(&self, icon: Icon) -> &str {
        match icon {
            Icon::Sun => &self.sun_selector,
            Icon::Moon => &self.moon_selector,
        }
    }
}

// Icons may be plain elements or inline <svg>
fn style_of(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(|svg| svg.style())
}

impl ThemeSurface for DomSurface {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<()> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".into()))?;
        root.set_attribute(name, value)
            .map_err(|e| ThemeError::Dom(js_message(&e)))
    }

    fn has_toggle(&self) -> Result<bool> {
        Ok(self.toggle_element()?.is_some())
    }

    fn set_icon_visible(&self, icon: Icon, visible: bool) -> Result<bool> {
        let Some(toggle) = self.toggle_element()? else {
            return Ok(false);
        };
        let selector = self.icon_selector(icon);
        let Some(element) = toggle
            .query_selector(selector)
            .map_err(|e| ThemeError::Dom(js_message(&e)))?
        else {
            return Ok(false);
        };
        let Some(style) = style_of(&element) else {
            tracing::warn!("Theme icon {} has no inline style", selector);
            return Ok(false);
        };
        style
            .set_property("display", display_value(visible))
            .map_err(|e| ThemeError::Dom(js_message(&e)))?;
        Ok(true)
    }
}

/// Config from `<meta name="mymonad-theme-config" content="{...}">`, or defaults.
pub fn read_config(document: &Document) -> ThemeConfig {
    let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
    let content = match document.query_selector(&selector) {
        Ok(Some(meta)) => meta.get_attribute("content"),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Failed to look up theme config: {}", js_message(&e));
            None
        }
    };

    match content {
        Some(raw) => ThemeConfig::from_json(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring theme config override: {}", e);
            ThemeConfig::default()
        }),
        None => ThemeConfig::default(),
    }
}
