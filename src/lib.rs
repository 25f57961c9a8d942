//! # medibuddy
//!
//! Leptos + WASM front end for the MediBuddy medicine-reminder app's entry
//! flow: a landing page offering Sign In / Sign Up / Continue as Guest, a
//! modal collecting profile fields, and a single browser-local profile slot.
//!
//! There is no server and no credential check. Submitting the modal commits
//! a plain profile record to `localStorage` and routes to the home view.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = config::AppConfig::from_build_env().log_level.to_log_level();
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
