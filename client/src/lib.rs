//! # console-client
//!
//! Leptos + WASM frontend for the administrative console.
//!
//! The session subsystem is the core of this crate: `util::session_store`
//! persists the session record, `state::session_manager` is the
//! authentication state machine, and `util::route_gate` decides per
//! navigation whether to render, redirect, or wait. Pages and components
//! sit on top of the reactive `state::session_handle`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: browser logging, panic hook, then hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
