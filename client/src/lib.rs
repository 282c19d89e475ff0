//! # client
//!
//! Leptos + WASM frontend for the IHM dashboard: vessel registry, material
//! records and the deck-plan mapping tool.
//!
//! This crate contains pages, components, application state, browser storage
//! access and navigation parameters. It drives the `deckplan` crate for all
//! viewport math and pin placement.

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount [`app::App`].
///
/// Without the `csr` feature there is no DOM to mount into and this does nothing.
pub fn start() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&"logger already initialised".into());
        }
        log::info!("ihm dashboard starting");
        leptos::mount::mount_to_body(app::App);
    }
}
