//! # client
//!
//! Leptos + WASM frontend for the INCO logo customizer: recolor the logo,
//! log in with an X username, save designs to the community gallery and
//! export them.
//!
//! Pure state and wire logic lives in `state`, `net` and `util` and is tested
//! natively; browser calls sit behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
