//! # client
//!
//! Leptos front end for the Keystone Builders site: the public marketing
//! pages, the admin section, and the session guard that gates it.
//!
//! The crate compiles twice: with `ssr` into the server for rendering, and
//! with `hydrate` into the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod intake;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
