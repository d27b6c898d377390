//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Which page the app is showing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Login,
    Register,
    Todos,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            page: page.0,
            set_page: page.1,
        }
    }

    /// Trigger a reload of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Switch to another page
    pub fn go_to(&self, page: Page) {
        self.set_page.set(page);
    }
}
