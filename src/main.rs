//! Placeboard Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod debounce;
mod models;
mod route;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

use route::DEFAULT_ROUTE;

fn main() {
    console_error_panic_hook::set_once();

    // Default route when the page loads without a hash
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if location.hash().map(|h| h.is_empty()).unwrap_or(true) {
            let _ = location.set_hash(DEFAULT_ROUTE);
        }
    }

    mount_to_body(App);
}
