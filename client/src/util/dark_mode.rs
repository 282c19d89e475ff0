//! Dark mode preference and theme attribute.
//!
//! The preference lives under `ihm_dashboard_dark` as `"true"`/`"false"`.
//! Applying it sets `data-theme` on the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Without the `csr` feature the system colour
//! scheme is unknown and [`apply`] does nothing.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "ihm_dashboard_dark";

/// Stored preference, else the system colour scheme.
pub fn read_preference(store: &impl KeyValueStore) -> bool {
    match store.get(STORAGE_KEY) {
        Ok(Some(val)) => return val == "true",
        Ok(None) => {}
        Err(err) => log::warn!("dark mode: could not read preference: {err}"),
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(err) = el.set_attribute("data-theme", if enabled { "dark" } else { "light" }) {
            log::warn!("dark mode: could not set theme: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, apply it and persist the new preference.
pub fn toggle(store: &impl KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(err) = store.set(STORAGE_KEY, if next { "true" } else { "false" }) {
        log::warn!("dark mode: could not save preference: {err}");
    }
    next
}
