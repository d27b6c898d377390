//! Bearer Session
//!
//! Explicit session object replacing a page-global token: loaded from
//! localStorage once at startup, passed into each authenticated API call.
//! Lifecycle is unauthenticated -> authenticated; there is no logout.

use web_sys::Storage;

/// localStorage key holding the bearer token
const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Read the persisted token, if any. Missing storage (no window,
    /// storage disabled) yields an unauthenticated session.
    pub fn load() -> Self {
        let token = local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten());
        Self { token }
    }

    /// Session holding a freshly issued token
    pub fn authenticated(token: String) -> Self {
        Self { token: Some(token) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Token for the Authorization header. `None` sends the request
    /// unauthenticated and lets the server reject it.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Persist the token under the fixed storage key
    pub fn persist(&self) {
        if let (Some(storage), Some(token)) = (local_storage(), self.token.as_ref()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
