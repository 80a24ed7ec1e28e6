//! `window.localStorage` as a [`PreferenceStore`].

use web_sys::{Storage, Window};

use super::js_message;
use crate::error::{Result, ThemeError};
use crate::store::PreferenceStore;

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Result<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(ThemeError::StorageUnavailable(
                "window.localStorage is null".into(),
            )),
            Err(e) => Err(ThemeError::StorageUnavailable(js_message(&e))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }
}
