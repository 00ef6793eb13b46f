//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Endpoint not found
    #[error("Endpoint not found: {0}")]
    NotFound(String),

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_REQUEST, "bad".into()),
            ClientError::BadRequest(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "missing".into()),
            ClientError::NotFound(_)
        ));
        match ClientError::from_status(StatusCode::BAD_GATEWAY, "upstream".into()) {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
