//! # grievance-client
//!
//! Leptos + WASM frontend shell for the grievance portal: the route table,
//! the role guard that gates the admin and student trees, and the session,
//! notification and theme providers around them.
//!
//! Pages here are thin; grievance data and mail live behind the backend API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod route;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
