//! OS-level color-scheme preference.

use std::cell::Cell;

/// Source of the ambient `prefers-color-scheme` setting.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
}

/// Color scheme held in memory; `set_prefers_dark` simulates an OS change.
#[derive(Debug, Default)]
pub struct FixedScheme {
    prefers_dark: Cell<bool>,
}

impl FixedScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Cell::new(prefers_dark),
        }
    }

    pub fn dark() -> Self {
        Self::new(true)
    }

    pub fn light() -> Self {
        Self::new(false)
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
    }
}

impl ColorSchemeSource for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }
}

impl<T: ColorSchemeSource + ?Sized> ColorSchemeSource for &T {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}
