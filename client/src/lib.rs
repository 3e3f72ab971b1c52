//! # client
//!
//! Leptos frontend for the portfolio site: routes, pages, components, the
//! compiled-in content catalog and the widget state machines behind the
//! carousels, comparison slider and deferred reveals.
//!
//! Built with `ssr` for server rendering and with `hydrate` for the browser
//! bundle. With neither feature the crate is plain logic, which is what the
//! unit tests exercise.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hydrating {}", env!("CARGO_PKG_NAME"));
    leptos::mount::hydrate_body(app::App);
}
