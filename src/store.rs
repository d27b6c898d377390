//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;
use crate::session::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current bearer session
    pub session: Session,
    /// Todos as last fetched; replaced wholesale on each reload
    pub todos: Vec<Todo>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }
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

/// Swap in a server-confirmed todo by ID
pub fn store_update_todo(store: &AppStore, updated: Todo) {
    store
        .todos()
        .write()
        .iter_mut()
        .find(|todo| todo.id == updated.id)
        .map(|todo| *todo = updated);
}

/// Count of todos not yet completed
pub fn remaining_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.is_completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, is_completed: bool) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            is_completed,
        }
    }

    #[test]
    fn test_remaining_count() {
        let todos = vec![
            make_todo(1, true),
            make_todo(2, false),
            make_todo(3, false),
        ];
        assert_eq!(remaining_count(&todos), 2);
        assert_eq!(remaining_count(&[]), 0);
    }
}
