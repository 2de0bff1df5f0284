//! Todos Screen
//!
//! Lists one user's remote todos merged with locally created ones, with
//! debounced search over titles and a creation form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::SearchBox;
use crate::models::Todo;
use crate::storage::{allocate_local_id, LocalRepo};
use crate::store::{store_add_todo, store_clear_todos, use_app_store, AppStateStoreFields};

#[component]
pub fn TodosScreen(user_id: i64) -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (new_title, set_new_title) = signal(String::new());
    let repo = LocalRepo::<Todo>::default();

    {
        let repo = repo.clone();
        Effect::new(move |_| {
            let repo = repo.clone();
            // Drop the previous visit's list before the awaited load; the
            // screen shows empty until the fetch resolves.
            store_clear_todos(&store);
            spawn_local(async move {
                let mut todos =
                    api::fetch_list::<Todo>(&format!("/todos?userId={}", user_id)).await;
                todos.extend(repo.list(Some(user_id)));
                *store.todos().write() = todos;
            });
        });
    }

    let filtered = move || {
        let q = query.get();
        store
            .todos()
            .get()
            .into_iter()
            .filter(|todo| todo.matches(&q))
            .collect::<Vec<_>>()
    };

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.is_empty() {
            return;
        }

        let existing: Vec<i64> = store.todos().get().iter().map(|t| t.id).collect();
        let todo = Todo {
            id: allocate_local_id(js_sys::Date::now(), &existing),
            user_id,
            title,
            completed: false,
        };
        repo.add(&todo);
        store_add_todo(&store, todo);
        set_new_title.set(String::new());
    };

    view! {
        <div class="screen todos-screen">
            <h2>{format!("Todos for user {}", user_id)}</h2>

            <SearchBox
                placeholder="Search by todo title..."
                on_search=move |q: String| set_query.set(q)
            />

            <form class="add-form-container" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="New todo title"
                    required=true
                    prop:value=move || new_title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_title.set(input.value());
                    }
                />
                <button type="submit">"Add todo"</button>
            </form>

            <ul class="card-list todo-list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|todo| {
                            let status_class =
                                if todo.completed { "todo-completed" } else { "todo-pending" };
                            let title = if todo.is_local() {
                                format!("{} (local)", todo.title)
                            } else {
                                todo.title.clone()
                            };

                            view! {
                                <li class=status_class>
                                    <span class="todo-title">{title}</span>
                                    <span class="todo-status">
                                        {if todo.completed { "Done" } else { "Pending" }}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
