//! User Notification Boundary
//!
//! Blocking alert presentation, kept out of the API layer.

/// Surface an operation failure (or a one-off status message) to the user
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            let _ = window.alert_with_message(message);
        }
        None => web_sys::console::error_1(&message.into()),
    }
}
