//! Todo Card Component
//!
//! Single todo row: completion checkbox, title label, delete control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::Todo;
use crate::notify;
use crate::store::{store_update_todo, use_app_store, AppStateStoreFields};

/// Inline style for the title label
pub(crate) fn title_style(completed: bool) -> &'static str {
    if completed {
        "text-decoration: line-through; color: gray;"
    } else {
        ""
    }
}

/// A single todo row
#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = todo.id;
    let title = todo.title.clone();
    // Checkbox state is optimistic; reverted if the update is rejected
    let (checked, set_checked) = signal(todo.is_completed);

    let toggle = move || {
        let was = checked.get();
        let mut updated = todo.clone();
        updated.is_completed = !was;
        set_checked.set(!was);
        spawn_local(async move {
            let session = store.session().get();
            match api::update_todo(&session, &updated).await {
                Ok(saved) => store_update_todo(&store, saved),
                Err(err) => {
                    set_checked.set(was);
                    notify::alert(&err.to_string());
                }
            }
        });
    };

    let remove = move || {
        spawn_local(async move {
            let session = store.session().get();
            match api::delete_todo(&session, id).await {
                Ok(()) => ctx.reload(),
                Err(err) => notify::alert(&err.to_string()),
            }
        });
    };

    view! {
        <div class="todo-card">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| toggle()
            />
            <span class="todo-title" style=move || title_style(checked.get())>
                {title}
            </span>
            <button class="delete-btn" on:click=move |_| remove()>"×"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_title_is_struck_and_gray() {
        let style = title_style(true);
        assert!(style.contains("line-through"));
        assert!(style.contains("color: gray"));
    }

    #[test]
    fn test_incomplete_title_is_unstyled() {
        assert_eq!(title_style(false), "");
    }
}
