//! Application Context
//!
//! Current-route state provided via the Leptos Context API so components
//! never read `window.location` themselves.

use leptos::prelude::*;

use crate::route::Route;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current location hash, updated by the router on every navigation.
    pub hash: ReadSignal<String>,
}

impl AppContext {
    pub fn new(hash: ReadSignal<String>) -> Self {
        Self { hash }
    }

    /// Parse the current hash into a route.
    pub fn route(&self) -> Route {
        Route::parse(&self.hash.get())
    }
}
