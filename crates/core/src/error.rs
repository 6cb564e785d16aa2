//! Client error model.

use thiserror::Error;

/// Result type used across the data-access clients.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure surfaced by a data-access client.
///
/// Local precondition failures (`Unauthenticated`, `Validation`) never reach
/// the network; everything else wraps a transport or decoding failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// No bearer token available in either storage scope.
    #[error("not authenticated: no bearer token available")]
    Unauthenticated,

    /// A required field was missing before the request was built.
    #[error("validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    /// The server answered with a non-success status.
    #[error("api error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    /// The request never completed (DNS, connect, abort, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Local validation failure with a synthesized 400 status.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            status: 400,
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body: body.into(),
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_synthesizes_400() {
        let err = ClientError::validation("Group name is required");
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("Group name is required"));
    }

    #[test]
    fn api_error_keeps_status_and_body() {
        let err = ClientError::api(503, "Service Unavailable", "{\"down\":true}");
        assert_eq!(err.status(), Some(503));
        let ClientError::Api { body, .. } = &err else {
            panic!("expected Api variant");
        };
        assert_eq!(body, "{\"down\":true}");
    }

    #[test]
    fn unauthenticated_has_no_status() {
        assert_eq!(ClientError::Unauthenticated.status(), None);
    }
}
