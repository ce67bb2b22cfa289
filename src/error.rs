//! Error types for the story catalog, host document and server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O failure (binding the listener, serving).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No story with the given id is registered.
    #[error("Unknown story: {0}")]
    UnknownStory(String),

    /// A story rendered from args is missing a required arg.
    #[error("Story is missing required arg: {0}")]
    MissingArg(&'static str),

    /// The host document has no element matching the query.
    #[error("Element not found: {0}")]
    ElementNotFound(String),
}

impl Error {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownStory(_) | Self::ElementNotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingArg(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config(_) | Self::Io(_) | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::UnknownStory("nope".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::MissingArg("fetcher").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            Error::MissingArg("fetcher").to_string(),
            "Story is missing required arg: fetcher"
        );
    }
}
