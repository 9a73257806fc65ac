//! # client
//!
//! Leptos + WASM frontend for the meal planner. Talks to the external
//! recipe/meal-plan REST API directly from the browser.
//!
//! This crate contains pages, components, application state, the REST
//! client and its wire types. The host binary at the workspace root renders
//! [`app::shell`] on the server; the `hydrate` feature builds the browser
//! bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
