//! UI Components
//!
//! Reusable Leptos components.

mod auth_screen;
mod toast;
mod todo_form;
mod todo_list;
mod todo_row;

pub use auth_screen::AuthScreen;
pub use toast::ToastStack;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
