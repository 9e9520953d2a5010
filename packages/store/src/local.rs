//! # `localStorage` key-value store (browser-side persistence)
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes the window's `localStorage` through [`web_sys::Storage`], so the
//! lead hand-off survives a client-side navigation and a full page load alike.
//!
//! ## Handle management
//!
//! The store is a zero-size struct that looks up `window.localStorage` on every
//! operation. `Storage` is not `Send`, and the lookup is cheap.
//!
//! ## Error handling
//!
//! `localStorage` throws when disabled (private browsing, quota exceeded, sandboxed
//! iframes). Every such failure degrades to "no data": reads return `None`, writes
//! are dropped with a `warn` log.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable; dropping write to {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write to {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn keys(&self) -> Vec<String> {
        let Some(storage) = self.storage() else {
            return Vec::new();
        };
        let len = storage.length().unwrap_or(0);
        (0..len)
            .filter_map(|i| storage.key(i).ok().flatten())
            .collect()
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.clear();
        }
    }
}
