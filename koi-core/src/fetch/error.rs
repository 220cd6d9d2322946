//! Fetch failures and their user-facing messages.

use thiserror::Error;

/// Prefix shown to users in front of every fetch failure.
pub const USER_MESSAGE_PREFIX: &str =
    "Failed to fetch data. Please check your query and network connection. Details: ";

/// Failure of a catalog fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query string was empty.
    #[error("Query parameter is required")]
    MissingQuery,

    /// The service answered with a non-2xx status.
    #[error("API Error ({status}): {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message from the body, or the status reason.
        message: String,
    },

    /// A 2xx body carried an explicit `error` field.
    #[error("API Error: {0}")]
    Api(String),

    /// The body parsed but is not an array of records.
    #[error("Unexpected API response format. Expected an array.")]
    UnexpectedShape,

    /// The body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Network failure before a response arrived.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No query supplied.
    MissingParameter,
    /// Non-2xx response or explicit error payload.
    UpstreamHttpError,
    /// Body could not be decoded.
    UpstreamParseError,
    /// Network failure or timeout.
    TransportError,
    /// Decoded body has the wrong shape.
    UnexpectedShape,
}

impl FetchError {
    /// Classification used by callers that only care about the category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::MissingQuery => ErrorKind::MissingParameter,
            FetchError::Http { .. } | FetchError::Api(_) => {
                ErrorKind::UpstreamHttpError
            }
            FetchError::Parse(_) => ErrorKind::UpstreamParseError,
            FetchError::Transport(_) | FetchError::InvalidEndpoint(_) => {
                ErrorKind::TransportError
            }
            FetchError::UnexpectedShape => ErrorKind::UnexpectedShape,
        }
    }

    /// Single human-readable message for the error panel.
    pub fn user_message(&self) -> String {
        format!("{USER_MESSAGE_PREFIX}{self}")
    }
}
