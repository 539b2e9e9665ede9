//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod todo_list;
mod todo_row;
mod delete_todo_button;
mod error_toast;

pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use delete_todo_button::DeleteTodoButton;
pub use error_toast::ErrorToast;
