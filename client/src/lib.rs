//! # client
//!
//! Leptos + WASM front end for the MAA copilot operation editor.
//!
//! This crate contains the editor page, its components, form and picker
//! state, the level-list fetch helper, and draft persistence. Document
//! conversion and search live in the `copilot` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
