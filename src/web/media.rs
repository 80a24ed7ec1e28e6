//! `window.matchMedia` as a [`ColorSchemeSource`].

use web_sys::{MediaQueryList, Window};

use super::js_message;
use crate::error::{Result, ThemeError};
use crate::system::ColorSchemeSource;

pub struct MediaQuery {
    list: MediaQueryList,
}

impl MediaQuery {
    pub fn new(window: &Window, query: &str) -> Result<Self> {
        match window.match_media(query) {
            Ok(Some(list)) => Ok(Self { list }),
            Ok(None) => Err(ThemeError::MediaQuery(format!(
                "matchMedia({query:?}) returned null"
            ))),
            Err(e) => Err(ThemeError::MediaQuery(js_message(&e))),
        }
    }

    /// Underlying list; its `change` event signals OS scheme changes.
    pub fn list(&self) -> &MediaQueryList {
        &self.list
    }
}

impl ColorSchemeSource for MediaQuery {
    fn prefers_dark(&self) -> bool {
        self.list.matches()
    }
}
