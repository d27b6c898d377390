//! API Error Taxonomy
//!
//! Typed failures returned by every `api` call. The variants carry the
//! user-facing message; presentation happens at the component boundary
//! (see `notify`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (connection refused, DNS, CORS)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status; message is the server's `message` field or an
    /// operation-specific fallback
    #[error("{0}")]
    Server(String),
    /// 2xx response whose body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server failure from an optional structured body message, falling
    /// back to a per-operation default
    pub fn server_or(message: Option<String>, fallback: &str) -> Self {
        ApiError::Server(message.unwrap_or_else(|| fallback.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_preferred_over_fallback() {
        let err = ApiError::server_or(Some("email already taken".into()), "Registration failed");
        assert_eq!(err.to_string(), "email already taken");
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        let err = ApiError::server_or(None, "Registration failed");
        assert_eq!(err.to_string(), "Registration failed");
    }
}
