//! Client error types

use thiserror::Error;

/// Error type for all admin client operations.
///
/// There is deliberately no retry or partial-failure machinery here: every
/// request is independent and its failure is surfaced immediately to the
/// caller (the operator retries by hand).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401/403 on an authenticated call. The token
    /// store and the persisted session have already been cleared.
    #[error("Session expired - please log in again")]
    SessionExpired,

    /// Non-2xx response carrying a backend message (`detail` or `message`
    /// field), surfaced verbatim to the operator.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (backend unreachable, DNS, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Session store I/O failure.
    #[error("Session store error: {0}")]
    Session(String),
}

/// Result type for admin client operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_backend_message_verbatim() {
        let err = ApiError::Api {
            status: 400,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
