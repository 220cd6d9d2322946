use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::fmt;

use crate::upstream::{UpstreamError, truncate_chars};

/// Longest slice of an upstream body echoed back in `details`.
pub const MAX_DETAILS_CHARS: usize = 500;

pub const FETCH_FAILED: &str = "Failed to fetch data from NASA API";
pub const INVALID_FORMAT: &str = "Invalid response format from NASA API";
pub const ENDPOINT_NOT_FOUND: &str = "NASA API endpoint not found";

pub type AppResult<T> = Result<T, ProxyError>;

/// Error answered by the proxy as `{ error, details? }`.
#[derive(Debug)]
pub struct ProxyError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ProxyError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    fn invalid_format(body: &str) -> Self {
        Self::internal(INVALID_FORMAT).with_details(truncate_chars(body, MAX_DETAILS_CHARS))
    }
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ProxyError {}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.message });
        if let Some(details) = self.details {
            body["details"] = Value::String(details);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<UpstreamError> for ProxyError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status: 404, .. } => Self::not_found(ENDPOINT_NOT_FOUND),
            UpstreamError::Status { status, body } => {
                if serde_json::from_str::<Value>(&body).is_ok() {
                    Self::internal(FETCH_FAILED).with_details(truncate_chars(
                        &format!("HTTP {status}: {body}"),
                        MAX_DETAILS_CHARS,
                    ))
                } else {
                    Self::invalid_format(&body)
                }
            }
            UpstreamError::NotJson { body } => Self::invalid_format(&body),
            UpstreamError::Timeout | UpstreamError::Transport(_) | UpstreamError::Client(_) => {
                Self::internal(FETCH_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_error_is_invalid_format() {
        let err = ProxyError::from(UpstreamError::Status {
            status: 503,
            body: "Service Unavailable".into(),
        });
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INVALID_FORMAT);
        assert_eq!(err.details.as_deref(), Some("Service Unavailable"));
    }

    #[test]
    fn json_error_keeps_status_in_details() {
        let err = ProxyError::from(UpstreamError::Status {
            status: 400,
            body: r#"{"error":"bad ADQL"}"#.into(),
        });
        assert_eq!(err.message, FETCH_FAILED);
        assert_eq!(err.details.as_deref(), Some(r#"HTTP 400: {"error":"bad ADQL"}"#));
    }

    #[test]
    fn not_found_and_timeout() {
        let err = ProxyError::from(UpstreamError::Status {
            status: 404,
            body: "Not Found".into(),
        });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, ENDPOINT_NOT_FOUND);

        let err = ProxyError::from(UpstreamError::Timeout);
        assert_eq!(err.message, FETCH_FAILED);
        assert!(err.details.is_none());
    }

    #[test]
    fn long_bodies_are_truncated() {
        let err = ProxyError::from(UpstreamError::NotJson {
            body: "x".repeat(2_000),
        });
        assert_eq!(err.details.map(|d| d.len()), Some(MAX_DETAILS_CHARS));
    }
}
