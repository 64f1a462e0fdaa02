//! # client
//!
//! Leptos + WASM frontend for the Sophomore's Dream explorer.
//!
//! This crate contains the single explorer page, its components, per-domain
//! application state, the pure curve/series math, and the WebSocket frame
//! client that streams tutor answers from the server.

pub mod app;
pub mod components;
pub mod math;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
