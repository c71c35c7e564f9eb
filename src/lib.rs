//! EcoSplash - role selection and mock sign-in
//!
//! Visitors pick a role (student, teacher or NGO), then sign in through a
//! mock email form or a mock Google button. Built with Leptos and WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
