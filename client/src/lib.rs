//! # client
//!
//! Leptos + WASM front end for the collaborative diagram editor.
//!
//! This crate contains the route table wiring, page shells, the attribute
//! toolbar, and the reactive handle around the shared element collection.
//! Document semantics (merge-patch, selection, submenu state) live in the
//! `diagram` crate; this crate binds them to DOM events.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/console hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
