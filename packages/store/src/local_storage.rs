//! # Browser `localStorage` store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It talks to `window.localStorage` through `web_sys::Storage`, so a signed-in
//! identity survives page reloads within the same browser profile.
//!
//! ## Error handling
//!
//! Reads swallow errors: a browser with storage disabled (private mode, quota,
//! sandboxed iframe) behaves as if nothing was ever saved. Writes report
//! [`StoreError::Unavailable`] so the session layer can log them.
//!
//! The `Storage` handle is looked up on every call rather than cached; the
//! browser already caches it and `web_sys::Storage` is not `Send`.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::kv::{KeyValueStore, StoreError};

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{value:?}"))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
