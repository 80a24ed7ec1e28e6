//! Theme controller: resolves, applies, persists and reconciles the theme.
//!
//! Precedence is stored preference first, then the OS color scheme. The
//! stored value is only ever written by [`ThemeController::toggle_theme`];
//! OS changes are applied live but never persisted.

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::store::PreferenceStore;
use crate::surface::{Icon, ThemeSurface};
use crate::system::ColorSchemeSource;
use crate::theme::Theme;

pub struct ThemeController<S, C, P> {
    store: S,
    scheme: C,
    surface: P,
    config: ThemeConfig,
}

impl<S, C, P> ThemeController<S, C, P>
where
    S: PreferenceStore,
    C: ColorSchemeSource,
    P: ThemeSurface,
{
    pub fn new(store: S, scheme: C, surface: P, config: ThemeConfig) -> Self {
        Self {
            store,
            scheme,
            surface,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheme(&self) -> &C {
        &self.scheme
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn system_theme(&self) -> Theme {
        Theme::from_prefers_dark(self.scheme.prefers_dark())
    }

    /// Explicit preference, if one is stored.
    ///
    /// A stored string that is not a known theme is treated as absent.
    pub fn stored_theme(&self) -> Result<Option<Theme>> {
        let Some(raw) = self.store.get(&self.config.storage_key)? else {
            return Ok(None);
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(e) => {
                tracing::warn!(
                    "Ignoring stored theme under {:?}: {}",
                    self.config.storage_key,
                    e
                );
                Ok(None)
            }
        }
    }

    pub fn effective_theme(&self) -> Result<Theme> {
        Ok(match self.stored_theme()? {
            Some(theme) => theme,
            None => self.system_theme(),
        })
    }

    /// Render `theme` on the page root and refresh the toggle icon.
    pub fn apply_theme(&self, theme: Theme) -> Result<()> {
        tracing::debug!("Applying theme: {}", theme);
        self.surface
            .set_root_attribute(&self.config.root_attribute, theme.as_str())?;
        self.update_toggle_icon(theme)?;
        Ok(())
    }

    /// Show the icon that switches away from `theme`; no-op without a toggle.
    /// Returns whether a toggle control is present.
    pub fn update_toggle_icon(&self, theme: Theme) -> Result<bool> {
        if !self.surface.has_toggle()? {
            return Ok(false);
        }

        let visible = theme.visible_icon();
        for icon in Icon::ALL {
            if !self.surface.set_icon_visible(icon, icon == visible)? {
                tracing::warn!("Theme toggle {} icon was not updated", icon.as_str());
            }
        }
        Ok(true)
    }

    /// Flip the effective theme, persist the result and apply it.
    pub fn toggle_theme(&self) -> Result<Theme> {
        let next = self.effective_theme()?.toggled();
        self.store.set(&self.config.storage_key, next.as_str())?;
        tracing::info!("Theme preference set to {}", next);
        self.apply_theme(next)?;
        Ok(next)
    }

    /// First step of page start-up: apply the effective theme right away.
    pub fn apply_initial(&self) -> Result<Theme> {
        let theme = self.effective_theme()?;
        self.apply_theme(theme)?;
        Ok(theme)
    }

    /// Refresh the toggle icon once the page structure exists.
    /// Returns whether a toggle control is present.
    pub fn on_dom_ready(&self) -> Result<bool> {
        let present = self.update_toggle_icon(self.effective_theme()?)?;
        if !present {
            tracing::debug!("No theme toggle on page");
        }
        Ok(present)
    }

    /// OS color scheme changed. Applied only when nothing is stored.
    pub fn on_system_change(&self, prefers_dark: bool) -> Result<Option<Theme>> {
        if let Some(stored) = self.stored_theme()? {
            tracing::debug!("System scheme changed; keeping stored theme {}", stored);
            return Ok(None);
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.apply_theme(theme)?;
        Ok(Some(theme))
    }
}
