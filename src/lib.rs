//! # storyfork-client
//!
//! Leptos + WASM frontend for StoryFork, a collaborative branching-fiction
//! platform where writers fork existing story nodes into alternate
//! continuations.
//!
//! This crate contains the session store, the authorized API gateway, the
//! route table with its navigation guard, and the pages that sit behind it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs browser logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
