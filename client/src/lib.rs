//! # client
//!
//! Leptos + WASM frontend for the CreatorHub creator directory.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST client. The `hydrate` feature builds the browser bundle; the
//! `ssr` feature builds the half rendered by the `creatorhub` host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
