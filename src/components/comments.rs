//! Comments Screen
//!
//! Lists one post's remote comments with debounced search over author name
//! and body.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::SearchBox;
use crate::models::Comment;
use crate::store::{store_clear_comments, use_app_store, AppStateStoreFields};

#[component]
pub fn CommentsScreen(post_id: i64) -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());

    Effect::new(move |_| {
        // Drop the previous visit's list before the awaited load; the
        // screen shows empty until the fetch resolves.
        store_clear_comments(&store);
        spawn_local(async move {
            let comments =
                api::fetch_list::<Comment>(&format!("/comments?postId={}", post_id)).await;
            *store.comments().write() = comments;
        });
    });

    let filtered = move || {
        let q = query.get();
        store
            .comments()
            .get()
            .into_iter()
            .filter(|comment| comment.matches(&q))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="screen comments-screen">
            <h2>{format!("Comments for post {}", post_id)}</h2>

            <SearchBox
                placeholder="Search by author or comment body..."
                on_search=move |q: String| set_query.set(q)
            />

            <ul class="card-list comment-list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|comment| {
                            view! {
                                <li>
                                    <div>
                                        <strong>{comment.name.clone()}</strong>
                                        <span class="comment-email">
                                            {format!(" ({})", comment.email)}
                                        </span>
                                    </div>
                                    <p class="comment-body">{comment.body.clone()}</p>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
