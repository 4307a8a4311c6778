//! SecureAuth - authentication front end
//!
//! Login, signup, password reset and one-time-code verification screens,
//! built with Leptos and WebAssembly, plus a small server that renders them
//! and proxies `/api/auth/*` to the authentication backend.

#![recursion_limit = "4096"]

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
