//! Todo Panel Component
//!
//! Renders the todo list and mediates CRUD against the backend. Loading is
//! gated on this page being mounted; the auth pages issue no todo requests.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{NewTodoForm, TodoCard};
use crate::context::AppContext;
use crate::notify;
use crate::store::{remaining_count, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Load on mount and whenever a mutation triggers a reload
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        web_sys::console::log_1(&format!("[TODOS] Loading todos, trigger={}", trigger).into());
        spawn_local(async move {
            let session = store.session().get();
            match api::list_todos(&session).await {
                Ok(todos) => store.todos().set(todos),
                Err(err) => notify::alert(&err.to_string()),
            }
        });
    });

    view! {
        <main class="todo-panel">
            <h1>"My Todos"</h1>

            <NewTodoForm />

            <div class="todo-list">
                <For
                    each=move || store.todos().get()
                    // Key on the mutable fields so server-confirmed updates re-render
                    key=|todo| (todo.id, todo.title.clone(), todo.is_completed)
                    children=move |todo| view! { <TodoCard todo=todo /> }
                />
            </div>

            <p class="todo-count">
                {move || {
                    let todos = store.todos().get();
                    format!("{} todos, {} remaining", todos.len(), remaining_count(&todos))
                }}
            </p>
        </main>
    }
}
