//! # spooky-studio
//!
//! Leptos + WASM front end for the haunted-house decoration studio: drag
//! emoji decorations from a palette onto the house, move them around, switch
//! between day and night, and clear the scene.
//!
//! All interaction state lives in the `scene` crate's tracker. This crate
//! maps DOM events (drag-and-drop, touch, pointer) into tracker calls,
//! publishes the tracker's state to reactive signals, and renders the scene.
//! Browser-only code is compiled in with the `csr` feature; without it the
//! crate builds natively so its pure helpers can be unit tested.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
