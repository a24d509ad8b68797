//! API error types for the calendar REST client.
//!
//! Transport failures and non-2xx responses are carried to the caller as-is;
//! nothing here retries, rewrites, or logs them.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for the calendar API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response, status and raw body untouched
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Request body could not be encoded, or response body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Client configuration rejected at build time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Server-provided error message, when the body is `{"error": "..."}`.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ApiError::Status { body, .. } => serde_json::from_str::<ErrorResponse>(body)
                .ok()
                .map(|r| r.error),
            _ => None,
        }
    }
}

/// Error body format returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[serde(alias = "message")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_parses_backend_body() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            body: r#"{"error": "Language not found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.error_message().as_deref(), Some("Language not found"));
    }

    #[test]
    fn test_error_message_none_for_plain_text() {
        let err = ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert!(err.error_message().is_none());
        assert_eq!(
            err.to_string(),
            "Unexpected status 502 Bad Gateway: <html>Bad Gateway</html>"
        );
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        let err = ApiError::InvalidParameter("language cannot be empty".to_string());
        assert!(err.status().is_none());
        assert!(err.error_message().is_none());
    }
}
