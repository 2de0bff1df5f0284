//! Placeboard App
//!
//! Root component: owns the current-hash signal, dispatches the fixed route
//! table to a screen, and renders breadcrumbs above whatever matched.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{Breadcrumbs, CommentsScreen, PostsScreen, TodosScreen, UsersScreen};
use crate::context::AppContext;
use crate::route::Screen;
use crate::store::AppState;

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Subscribe the hash signal to `hashchange`. The listener lives for the
/// page lifetime, so the closure is forgotten rather than dropped.
fn listen_for_hash_changes(set_hash: WriteSignal<String>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let on_hash_change = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(move |_| {
        set_hash.set(current_hash());
    });
    if window
        .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
        .is_ok()
    {
        on_hash_change.forget();
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (hash, set_hash) = signal(current_hash());
    listen_for_hash_changes(set_hash);

    // Provide the entity store and route context to all children
    let ctx = AppContext::new(hash);
    provide_context(Store::new(AppState::default()));
    provide_context(ctx);

    view! {
        <div class="app-root">
            <Breadcrumbs />
            {move || {
                let route = ctx.route();
                match route.screen {
                    Some(Screen::Users) => view! { <UsersScreen /> }.into_any(),
                    Some(Screen::Todos) => match route.user_id {
                        Some(user_id) => view! { <TodosScreen user_id=user_id /> }.into_any(),
                        None => view! {
                            <p class="screen-error">"Error: no user id in route."</p>
                        }
                        .into_any(),
                    },
                    Some(Screen::Posts) => match route.user_id {
                        Some(user_id) => view! { <PostsScreen user_id=user_id /> }.into_any(),
                        None => view! {
                            <p class="screen-error">"Error: no user id in route."</p>
                        }
                        .into_any(),
                    },
                    Some(Screen::Comments) => match route.post_id {
                        Some(post_id) => view! { <CommentsScreen post_id=post_id /> }.into_any(),
                        None => view! {
                            <p class="screen-error">"Error: no post id in route."</p>
                        }
                        .into_any(),
                    },
                    None => view! {
                        <p class="not-found">
                            {format!("Page not found for route: {}", route.root)}
                        </p>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
