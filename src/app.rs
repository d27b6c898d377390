//! Todo Frontend App
//!
//! Top-level component: picks the initial page from the persisted session
//! and switches between the auth pages and the todo panel.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{LoginForm, RegisterForm, TodoPanel};
use crate::context::{AppContext, Page};
use crate::session::Session;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::load();
    let initial = if session.is_authenticated() {
        Page::Todos
    } else {
        Page::Login
    };

    // State
    let (page, set_page) = signal(initial);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (page, set_page),
    ));
    provide_context(Store::new(AppState::new(session)));

    view! {
        <div class="app-layout">
            {move || match page.get() {
                Page::Login => view! { <LoginForm /> }.into_any(),
                Page::Register => view! { <RegisterForm /> }.into_any(),
                Page::Todos => view! { <TodoPanel /> }.into_any(),
            }}
        </div>
    }
}
