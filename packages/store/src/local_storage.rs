//! # Browser localStorage session storage
//!
//! [`LocalStorage`] is the [`SessionStorage`] used on the **web platform**. It
//! is a zero-size handle that looks up `window.localStorage` on every call, so
//! it is `Clone`-friendly and never holds a JS object across awaits.
//!
//! All methods swallow errors (private mode, quota, missing window): reads
//! become `None`, writes become no-ops with a warning.

use crate::session::SessionStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        let saved = Self::storage().and_then(|s| s.set_item(key, value).ok());
        if saved.is_none() {
            tracing::warn!("localStorage write failed for {key}");
        }
    }

    fn remove(&self, key: &str) {
        let removed = Self::storage().and_then(|s| s.remove_item(key).ok());
        if removed.is_none() {
            tracing::warn!("localStorage remove failed for {key}");
        }
    }
}
