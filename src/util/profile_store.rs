//! Browser-local persistence for the single current-user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProfileStore` is the only code that touches storage. It binds a
//! `StorageBackend` to one fixed key and owns the degrade policy: when no
//! storage surface exists (SSR, native tests, locked-down browsers) reads
//! come back absent and writes are dropped, and a stored value that is not
//! a valid profile reads as absent. Both cases are logged, never raised.

#[cfg(test)]
#[path = "profile_store_test.rs"]
mod profile_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;
use crate::state::profile::Profile;

/// String key/value surface shaped like `window.localStorage`.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`. Unavailable outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StoreError::Unavailable),
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Backend(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?.get_item(key).map_err(|e| js_error(&e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?.set_item(key, value).map_err(|e| js_error(&e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        local_storage()?.remove_item(key).map_err(|e| js_error(&e))
    }
}

#[cfg(not(feature = "hydrate"))]
impl StorageBackend for BrowserStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// In-process map. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// One profile slot at a fixed key.
#[derive(Clone, Debug)]
pub struct ProfileStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> ProfileStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the slot, surfacing unavailable storage and corrupt data.
    pub fn try_read(&self) -> Result<Option<Profile>, StoreError> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    /// Read the slot; anything other than a valid profile reads as absent.
    pub fn read(&self) -> Option<Profile> {
        match self.try_read() {
            Ok(profile) => profile,
            Err(StoreError::Unavailable) => None,
            Err(e) => {
                leptos::logging::warn!("ignoring stored profile at {}: {e}", self.key);
                None
            }
        }
    }

    /// Replace the slot with `profile`. Never merges with the prior value.
    pub fn write(&self, profile: &Profile) {
        let raw = match serde_json::to_string(profile) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("profile serialization failed: {e}");
                return;
            }
        };
        match self.backend.set_item(&self.key, &raw) {
            Ok(()) | Err(StoreError::Unavailable) => {}
            Err(e) => leptos::logging::warn!("profile write to {} failed: {e}", self.key),
        }
    }

    /// Empty the slot. Clearing an empty slot is fine.
    pub fn clear(&self) {
        match self.backend.remove_item(&self.key) {
            Ok(()) | Err(StoreError::Unavailable) => {}
            Err(e) => leptos::logging::warn!("profile clear at {} failed: {e}", self.key),
        }
    }
}
