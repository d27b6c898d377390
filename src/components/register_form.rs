//! Register Form Component
//!
//! Email/password form creating an account, then sending the user back to
//! the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Page};
use crate::notify;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

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
            match api::register(&email, &password).await {
                Ok(()) => {
                    notify::alert("Registration successful! Please log in.");
                    ctx.go_to(Page::Login);
                }
                Err(err) => notify::alert(&err.to_string()),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h1>"Register"</h1>
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
            <button type="submit">"Register"</button>
            <button type="button" class="link-btn" on:click=move |_| ctx.go_to(Page::Login)>
                "Already registered? Login"
            </button>
        </form>
    }
}
