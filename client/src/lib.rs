//! # client
//!
//! Leptos + WASM frontend for MyEvent @ USM.
//!
//! This crate wires the `usm-session` core into the browser: `localStorage`
//! persistence, the HTTP user directory, route-guard effects, and the pages
//! that depend on them. Browser-only code is gated behind the `csr` feature
//! so the pure helpers build and test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
