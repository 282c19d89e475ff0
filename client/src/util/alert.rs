//! Blocking browser dialogs for user-facing failures and prompts.
//!
//! Outside the `csr` build these only log, so handlers stay callable in tests.

use crate::error::AppError;

/// Log `err` and show its message in a blocking alert.
pub fn report(err: &AppError) {
    match err {
        AppError::Storage(inner) => log::error!("storage failure: {inner}"),
        other => log::warn!("rejected: {other}"),
    }
    show(&err.to_string());
}

/// Blocking alert with `message`.
pub fn show(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}
