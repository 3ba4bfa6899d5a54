//! API Error Types
//!
//! Errors raised while talking to the remote API and their conversion into
//! the inline messages shown to the user.

use thiserror::Error;

/// Message shown for any failure to reach the server
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Message shown when the server rejects a request without a reason
pub const REQUEST_FAILED_MESSAGE: &str = "API request failed";

/// Message shown when a response body cannot be understood
pub const MALFORMED_MESSAGE: &str = "Failed to parse server response";

/// Message shown when an authenticated call is made without a session
pub const UNAUTHENTICATED_MESSAGE: &str = "Not authenticated";

/// API error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API error {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// No bearer credential is held for the session
    #[error("Not authenticated")]
    Unauthenticated,
}

impl ApiError {
    /// Build a rejection from a status code and raw response body
    pub fn rejected(status: u16, body: &str) -> Self {
        ApiError::Rejected {
            status,
            message: extract_detail(body).unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string()),
        }
    }

    /// Display-only message for inline error banners.
    ///
    /// Rejections surface the server's message verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Malformed(_) => MALFORMED_MESSAGE.to_string(),
            ApiError::Unauthenticated => UNAUTHENTICATED_MESSAGE.to_string(),
        }
    }

    /// HTTP status for rejections
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server refused the bearer credential
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthenticated) || matches!(self.status(), Some(401) | Some(403))
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Pull the human-readable reason out of an error body.
///
/// Understands `{"detail": "..."}`, validation lists of the form
/// `{"detail": [{"msg": "..."}]}`, and `message` / `error` string fields.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    match value.get("detail") {
        Some(serde_json::Value::String(detail)) => return Some(detail.clone()),
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        _ => {}
    }

    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_is_verbatim() {
        let err = ApiError::rejected(401, r#"{"detail": "Incorrect email or password"}"#);
        assert_eq!(err.user_message(), "Incorrect email or password");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_validation_list_is_joined() {
        let body = r#"{"detail": [{"msg": "field required"}, {"msg": "invalid email"}]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("field required; invalid email")
        );
    }

    #[test]
    fn test_missing_detail_falls_back() {
        let err = ApiError::rejected(500, "<html>oops</html>");
        assert_eq!(err.user_message(), REQUEST_FAILED_MESSAGE);
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_network_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Network error");
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
