//! New Todo Form Component
//!
//! Form for creating new todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::notify;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating a new todo; the list is reloaded on success
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.is_empty() {
            return;
        }

        spawn_local(async move {
            let session = store.session().get();
            match api::create_todo(&session, &title).await {
                Ok(_) => {
                    set_title.set(String::new());
                    ctx.reload();
                }
                Err(err) => notify::alert(&err.to_string()),
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add new todo..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
