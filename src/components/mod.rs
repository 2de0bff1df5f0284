//! UI Components
//!
//! Reusable Leptos components and the four screens.

mod breadcrumbs;
mod comments;
mod delete_confirm_button;
mod posts;
mod search_box;
mod todos;
mod users;

pub use breadcrumbs::Breadcrumbs;
pub use comments::CommentsScreen;
pub use delete_confirm_button::DeleteConfirmButton;
pub use posts::PostsScreen;
pub use search_box::SearchBox;
pub use todos::TodosScreen;
pub use users::UsersScreen;
