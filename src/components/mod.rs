//! UI Components
//!
//! Leptos components for the auth pages and the todo panel.

mod login_form;
mod new_todo_form;
mod register_form;
mod todo_card;
mod todo_panel;

pub use login_form::LoginForm;
pub use new_todo_form::NewTodoForm;
pub use register_form::RegisterForm;
pub use todo_card::TodoCard;
pub use todo_panel::TodoPanel;
