//! # client
//!
//! Leptos + WASM frontend for the artworks table.
//!
//! This crate contains the page, components, table state and network types.
//! The `server` crate renders it with the `ssr` feature; the browser bundle is
//! built with `hydrate` and attaches through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire up panic/log reporting and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
