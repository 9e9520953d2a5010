//! Error taxonomy for backend calls and user input.

use thiserror::Error;

/// Everything that can go wrong between a user action and a usable backend reply.
///
/// Malformed browser-local data is deliberately absent: the lead cache treats it as
/// "no data" and never reports it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, CORS, offline, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not valid JSON for the expected type.
    #[error("Could not read the server response: {0}")]
    Decode(String),

    /// Valid JSON, but none of the shapes this endpoint is known to return.
    #[error("Invalid data format received: {0}")]
    UnexpectedShape(String),

    /// Rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}
