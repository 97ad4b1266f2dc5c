//! Showcase - Product Landing Page
//!
//! A single-product marketing page with animated feature cards and a
//! simulated add-to-cart, built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();

    for error in crate::core::product().check().errors {
        leptos::logging::error!("Product record: {}", error);
    }

    leptos::mount::hydrate_body(App);
}
