//! Login Form Component
//!
//! Email/password form posting to the auth endpoint. A successful login
//! persists the issued token and switches to the todo panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Page};
use crate::notify;
use crate::session::Session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            return;
        }

        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(issued) => {
                    let session = Session::authenticated(issued.token);
                    session.persist();
                    store.session().set(session);
                    ctx.go_to(Page::Todos);
                }
                Err(err) => notify::alert(&err.to_string()),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h1>"Login"</h1>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Login"</button>
            <button type="button" class="link-btn" on:click=move |_| ctx.go_to(Page::Register)>
                "Need an account? Register"
            </button>
        </form>
    }
}
