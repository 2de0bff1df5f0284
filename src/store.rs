//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each screen owns
//! one list field; loading a screen overwrites its field, so remote data is
//! re-fetched on every navigation and never cached across screens.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Comment, Post, Todo, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Merged remote + local users for the users screen
    pub users: Vec<User>,
    /// Merged remote + local todos for the current route's user
    pub todos: Vec<Todo>,
    /// Remote posts for the current route's user
    pub posts: Vec<Post>,
    /// Remote comments for the current route's post
    pub comments: Vec<Comment>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a user to the store
pub fn store_add_user(store: &AppStore, user: User) {
    store.users().write().push(user);
}

/// Remove a user from the store by ID
pub fn store_remove_user(store: &AppStore, user_id: i64) {
    store.users().write().retain(|user| user.id != user_id);
}

/// Add a todo to the store
pub fn store_add_todo(store: &AppStore, todo: Todo) {
    store.todos().write().push(todo);
}

// Screens call these at the top of their mount effect, before the awaited
// load, so a navigation never shows the previous visit's list while the new
// fetch is in flight.

/// Clear the users list
pub fn store_clear_users(store: &AppStore) {
    store.users().write().clear();
}

/// Clear the todos list
pub fn store_clear_todos(store: &AppStore) {
    store.todos().write().clear();
}

/// Clear the posts list
pub fn store_clear_posts(store: &AppStore) {
    store.posts().write().clear();
}

/// Clear the comments list
pub fn store_clear_comments(store: &AppStore) {
    store.comments().write().clear();
}
