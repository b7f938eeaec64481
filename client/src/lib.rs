//! # hotel-desk
//!
//! Leptos front end for the hotel front desk.
//!
//! ARCHITECTURE
//! ============
//! - `state`: the auth session context provided at the application root.
//! - `util`: browser glue (token storage, route guard, liveness flags).
//! - `net`: REST calls over `gloo-net`, built from `hotel::endpoints`.
//! - `pages`: one module per route; pure helpers sit beside each view.
//! - `components`: small shared view pieces.
//!
//! Browser-only code is gated on the `csr` feature so the crate and its
//! unit tests also build natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
