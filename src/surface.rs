//! Page surface the controller renders onto.
//!
//! Covers the two things the theme touches on a page: the attribute on the
//! document root and the visibility of the toggle control's icons.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::Result;

/// Icons inside the toggle control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Sun,
    Moon,
}

impl Icon {
    pub const ALL: [Icon; 2] = [Icon::Sun, Icon::Moon];

    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Sun => "sun",
            Icon::Moon => "moon",
        }
    }
}

/// CSS `display` value for a shown or hidden icon.
pub fn display_value(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

pub trait ThemeSurface {
    /// Set `name` to `value` on the document root element.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<()>;

    /// Whether the toggle control is on the page.
    fn has_toggle(&self) -> Result<bool>;

    /// Show or hide one icon inside the toggle control.
    /// Returns `false` when the icon (or the toggle) is missing.
    fn set_icon_visible(&self, icon: Icon, visible: bool) -> Result<bool>;
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<()> {
        (**self).set_root_attribute(name, value)
    }

    fn has_toggle(&self) -> Result<bool> {
        (**self).has_toggle()
    }

    fn set_icon_visible(&self, icon: Icon, visible: bool) -> Result<bool> {
        (**self).set_icon_visible(icon, visible)
    }
}

#[derive(Debug, Default)]
struct ToggleState {
    /// Present icons mapped to their current `display` value (None until styled)
    icons: BTreeMap<&'static str, Option<&'static str>>,
}

#[derive(Debug, Default)]
struct PageState {
    root: BTreeMap<String, String>,
    toggle: Option<ToggleState>,
}

/// In-memory page, for tests and hosts without a DOM.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: RefCell<PageState>,
}

impl MemoryPage {
    /// Page with no toggle control
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with a toggle control containing both icons
    pub fn with_toggle() -> Self {
        Self::with_toggle_icons(&Icon::ALL)
    }

    /// Page with a toggle control containing only `icons`
    pub fn with_toggle_icons(icons: &[Icon]) -> Self {
        let page = Self::new();
        let toggle = ToggleState {
            icons: icons.iter().map(|icon| (icon.as_str(), None)).collect(),
        };
        page.state.borrow_mut().toggle = Some(toggle);
        page
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().root.get(name).cloned()
    }

    /// Current `display` of an icon; `None` if missing or never styled.
    pub fn icon_display(&self, icon: Icon) -> Option<&'static str> {
        self.state
            .borrow()
            .toggle
            .as_ref()
            .and_then(|t| t.icons.get(icon.as_str()).copied().flatten())
    }

    pub fn is_icon_visible(&self, icon: Icon) -> bool {
        self.icon_display(icon) == Some(display_value(true))
    }
}

impl ThemeSurface for MemoryPage {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .root
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn has_toggle(&self) -> Result<bool> {
        Ok(self.state.borrow().toggle.is_some())
    }

    fn set_icon_visible(&self, icon: Icon, visible: bool) -> Result<bool> {
        let mut state = self.state.borrow_mut();
        let Some(slot) = state
            .toggle
            .as_mut()
            .and_then(|t| t.icons.get_mut(icon.as_str()))
        else {
            return Ok(false);
        };
        *slot = Some(display_value(visible));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_without_toggle_ignores_icon_updates() {
        let page = MemoryPage::new();
        assert!(!page.has_toggle().unwrap());
        assert!(!page.set_icon_visible(Icon::Sun, true).unwrap());
        assert_eq!(page.icon_display(Icon::Sun), None);
    }

    #[test]
    fn icons_start_unstyled() {
        let page = MemoryPage::with_toggle();
        assert!(page.has_toggle().unwrap());
        assert_eq!(page.icon_display(Icon::Sun), None);
        assert_eq!(page.icon_display(Icon::Moon), None);
    }

    #[test]
    fn set_icon_visible_writes_display_value() {
        let page = MemoryPage::with_toggle();
        assert!(page.set_icon_visible(Icon::Moon, false).unwrap());
        assert_eq!(page.icon_display(Icon::Moon), Some("none"));
        assert!(page.set_icon_visible(Icon::Moon, true).unwrap());
        assert!(page.is_icon_visible(Icon::Moon));
    }

    #[test]
    fn missing_icon_reports_false() {
        let page = MemoryPage::with_toggle_icons(&[Icon::Sun]);
        assert!(!page.set_icon_visible(Icon::Moon, true).unwrap());
        assert!(page.set_icon_visible(Icon::Sun, true).unwrap());
    }
}
