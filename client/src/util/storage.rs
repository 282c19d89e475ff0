//! Narrow key-value storage interface over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! All persisted dashboard state (deck sections, per-section inventories,
//! the vessel-wide summary list) goes through [`KeyValueStore`] as JSON.
//! [`LocalStore`] talks to the browser under the `csr` feature and is a no-op
//! elsewhere; [`MemoryStore`] backs tests.
//!
//! TRADE-OFFS
//! ==========
//! Writes are read-then-overwrite with no locking. Two tabs editing the same
//! key race and the last writer wins; [`KeyValueStore::notify_changed`] lets
//! other views reload after a write.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Prefix for a vessel's deck section list.
pub const SECTIONS_PREFIX: &str = "vessel_sections_";
/// Prefix for one deck section's material entries.
pub const INVENTORY_PREFIX: &str = "inventory_";
/// Prefix for a vessel's flat summary list.
pub const VESSEL_INVENTORY_PREFIX: &str = "vessel_inventory_";

/// Event name broadcast after every write. Matches the browser's cross-tab event.
pub const STORAGE_CHANGED_EVENT: &str = "storage";

/// `vessel_sections_<vessel>`
pub fn sections_key(vessel: &str) -> String {
    format!("{SECTIONS_PREFIX}{vessel}")
}

/// `inventory_<vessel>_<section>`
pub fn inventory_key(vessel: &str, section: &str) -> String {
    format!("{INVENTORY_PREFIX}{vessel}_{section}")
}

/// `vessel_inventory_<vessel>`
pub fn vessel_inventory_key(vessel: &str) -> String {
    format!("{VESSEL_INVENTORY_PREFIX}{vessel}")
}

/// String key-value store with a change signal.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Tell other open views that stored data changed.
    fn notify_changed(&self) {}
}

/// Load and decode the JSON value under `key`. `Ok(None)` when absent.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Malformed { key: key.to_owned(), source })
}

/// Encode `value` as JSON and overwrite `key`.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })?;
    store.set(key, &raw)?;
    log::debug!("storage: wrote {} bytes to {key}", raw.len());
    Ok(())
}

/// Browser `localStorage`. Outside the `csr` build it stores nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::WriteRejected { key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn notify_changed(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            match web_sys::Event::new(STORAGE_CHANGED_EVENT) {
                Ok(event) => {
                    if let Err(err) = window.dispatch_event(&event) {
                        log::warn!("storage: change broadcast failed: {err:?}");
                    }
                }
                Err(err) => log::warn!("storage: could not create change event: {err:?}"),
            }
        }
    }
}

/// In-memory store. Counts change notifications so callers can assert on them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    notifications: Cell<usize>,
    /// Writes to keys starting with any of these fail, as a full browser store would.
    rejected_prefixes: RefCell<Vec<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `notify_changed` calls so far.
    #[must_use]
    pub fn notifications(&self) -> usize {
        self.notifications.get()
    }

    /// Whether `key` holds any value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    /// Fail every later write whose key starts with `prefix`.
    pub fn reject_writes(&self, prefix: impl Into<String>) {
        self.rejected_prefixes.borrow_mut().push(prefix.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.rejected_prefixes.borrow().iter().any(|p| key.starts_with(p.as_str())) {
            return Err(StorageError::WriteRejected { key: key.to_owned() });
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn notify_changed(&self) {
        self.notifications.set(self.notifications.get() + 1);
    }
}
