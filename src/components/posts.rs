//! Posts Screen
//!
//! Lists one user's remote posts with debounced search over title and body.
//! Posts are remote-only; there is no creation form here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::SearchBox;
use crate::models::Post;
use crate::store::{store_clear_posts, use_app_store, AppStateStoreFields};

const BODY_PREVIEW_CHARS: usize = 100;

#[component]
pub fn PostsScreen(user_id: i64) -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());

    Effect::new(move |_| {
        // Drop the previous visit's list before the awaited load; the
        // screen shows empty until the fetch resolves.
        store_clear_posts(&store);
        spawn_local(async move {
            let posts = api::fetch_list::<Post>(&format!("/posts?userId={}", user_id)).await;
            *store.posts().write() = posts;
        });
    });

    let filtered = move || {
        let q = query.get();
        store
            .posts()
            .get()
            .into_iter()
            .filter(|post| post.matches(&q))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="screen posts-screen">
            <h2>{format!("Posts for user {}", user_id)}</h2>

            <SearchBox
                placeholder="Search by post title or body..."
                on_search=move |q: String| set_query.set(q)
            />

            <ul class="card-list post-list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|post| {
                            view! {
                                <li>
                                    <div>
                                        <strong>{post.title.clone()}</strong>
                                        <p class="post-body">
                                            {post.body_preview(BODY_PREVIEW_CHARS)}
                                        </p>
                                    </div>
                                    <a href=format!("#users#posts#comments?postId={}", post.id)>
                                        "[Comments]"
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
