//! Error types for the Ferry client

use ferry_core::dto::error::ErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Message shown when no response reached the client at all
pub const TRANSPORT_FAILURE_MESSAGE: &str = "can't perform request to server";

/// Errors that can occur when talking to the transfer runner
///
/// There are exactly two kinds: either no response arrived, or a response
/// arrived that was not a usable success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No HTTP response was received (connection refused, reset, DNS, ...)
    #[error("transport failure: {0}")]
    Transport(String),

    /// The runner answered with a non-success response, or a body that could not be read
    #[error("server error (status {status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response
        message: String,
    },
}

impl ClientError {
    /// Create a server error from status code and message
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Build a server error from a non-success response body
    ///
    /// Prefers the structured `message` field; falls back to the raw body, then
    /// to the status' reason phrase.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = ErrorBody::parse(body)
            .and_then(|b| b.message)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown error")
                    .to_string()
            });
        Self::server(status, message)
    }

    /// Check if no response reached the client
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status: 404, .. })
    }

    /// Message suitable for showing to a user
    ///
    /// Transport failures always render the fixed fallback message; server
    /// errors render the runner's message verbatim.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport(_) => TRANSPORT_FAILURE_MESSAGE,
            Self::Server { message, .. } => message,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_ignores_detail() {
        let err = ClientError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "can't perform request to server");
        assert!(err.is_transport());
    }

    #[test]
    fn test_structured_message_extracted() {
        let err = ClientError::from_response_body(
            400,
            r#"{"timestamp":1553000000000,"status":400,"error":"Bad Request","message":"Not a directory: /nope","path":"/api/checkLocalDir"}"#,
        );
        assert_eq!(err.user_message(), "Not a directory: /nope");
        assert_eq!(
            err,
            ClientError::server(400, "Not a directory: /nope")
        );
    }

    #[test]
    fn test_message_verbatim() {
        let err = ClientError::from_response_body(500, r#"{"message":"  spaced: out  "}"#);
        assert_eq!(err.user_message(), "  spaced: out  ");
    }

    #[test]
    fn test_fallbacks_without_structured_body() {
        let err = ClientError::from_response_body(502, "upstream down\n");
        assert_eq!(err.user_message(), "upstream down");

        let err = ClientError::from_response_body(404, "");
        assert_eq!(err.user_message(), "Not Found");
        assert!(err.is_not_found());
    }
}
