//! Learnbridge - tutoring and test-prep landing site
//!
//! A server-rendered, hydrated landing page built with Leptos and
//! WebAssembly. Pure timing and copy live in [`core`], components in [`ui`].

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
