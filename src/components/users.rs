//! Users Screen
//!
//! Lists remote users merged with locally created ones, with debounced
//! search, a creation form, and delete for local entries only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{DeleteConfirmButton, SearchBox};
use crate::models::User;
use crate::storage::{allocate_local_id, LocalRepo};
use crate::store::{
    store_add_user, store_clear_users, store_remove_user, use_app_store, AppStateStoreFields,
};

#[component]
pub fn UsersScreen() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (new_name, set_new_name) = signal(String::new());
    let (new_email, set_new_email) = signal(String::new());
    let repo = LocalRepo::<User>::default();

    // Fetch remote users and merge stored local ones on mount. Data is not
    // cached across navigations; every visit reloads.
    {
        let repo = repo.clone();
        Effect::new(move |_| {
            let repo = repo.clone();
            // Drop the previous visit's list before the awaited load; the
            // screen shows empty until the fetch resolves.
            store_clear_users(&store);
            spawn_local(async move {
                let mut users = api::fetch_list::<User>("/users").await;
                users.extend(repo.list(None));
                *store.users().write() = users;
            });
        });
    }

    let filtered = move || {
        let q = query.get();
        store
            .users()
            .get()
            .into_iter()
            .filter(|user| user.matches(&q))
            .collect::<Vec<_>>()
    };

    let add_user = {
        let repo = repo.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let name = new_name.get();
            let email = new_email.get();
            if name.is_empty() || email.is_empty() {
                return;
            }

            let existing: Vec<i64> = store.users().get().iter().map(|u| u.id).collect();
            let user = User {
                id: allocate_local_id(js_sys::Date::now(), &existing),
                name,
                email,
            };
            repo.add(&user);
            store_add_user(&store, user);
            set_new_name.set(String::new());
            set_new_email.set(String::new());
        }
    };

    view! {
        <div class="screen users-screen">
            <h2>"Users"</h2>

            <SearchBox
                placeholder="Search by name or email..."
                on_search=move |q: String| set_query.set(q)
            />

            <form class="add-form-container" on:submit=add_user>
                <input
                    type="text"
                    placeholder="User name"
                    required=true
                    prop:value=move || new_name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_name.set(input.value());
                    }
                />
                <input
                    type="email"
                    placeholder="User email"
                    required=true
                    prop:value=move || new_email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_email.set(input.value());
                    }
                />
                <button type="submit">"Add user"</button>
            </form>

            <ul class="card-list">
                {move || {
                    let repo = repo.clone();
                    filtered()
                        .into_iter()
                        .map(|user| {
                            let user_id = user.id;
                            let is_local = user.is_local();
                            let repo = repo.clone();
                            let delete_button = is_local.then(|| {
                                view! {
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        on_confirm=Callback::new(move |_| {
                                            repo.remove(user_id);
                                            store_remove_user(&store, user_id);
                                        })
                                    />
                                }
                            });

                            view! {
                                <li class=if is_local { "local-user" } else { "" }>
                                    <div>
                                        <strong>{user.name.clone()}</strong>
                                        <span>{format!(" ({})", user.email)}</span>
                                    </div>
                                    <div class="card-links">
                                        <a href=format!("#users#todos?userId={}", user_id)>
                                            "[Todos]"
                                        </a>
                                        <a href=format!("#users#posts?userId={}", user_id)>
                                            "[Posts]"
                                        </a>
                                        {delete_button}
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
