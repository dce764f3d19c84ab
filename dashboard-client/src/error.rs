//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
///
/// One failure is terminal for the request attempt that produced it;
/// nothing in this crate retries.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received (connection refused, DNS, TLS, ...)
    #[error("Request failed: {0}")]
    Fetch(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body is not the JSON the endpoint promises
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// An outgoing body could not be serialized; nothing was sent
    #[error("Encode error: {0}")]
    Encode(serde_json::Error),

    /// Base URL or path could not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ClientError::Timeout;
        }
        if let Some(status) = err.status() {
            return ClientError::Http {
                status: status.as_u16(),
                body: String::new(),
            };
        }
        if err.is_builder() {
            return ClientError::InvalidUrl(err.to_string());
        }
        ClientError::Fetch(err.to_string())
    }
}

impl ClientError {
    /// Most specific shared error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Fetch(_) => ErrorCode::NetworkError,
            ClientError::Timeout => ErrorCode::TimeoutError,
            ClientError::Http { status, .. } => ErrorCode::from_http_status(*status),
            // Well-formed JSON of the wrong type vs. a body that is not JSON at all
            ClientError::Decode(e) if e.is_data() => ErrorCode::UnexpectedShape,
            ClientError::Decode(_) => ErrorCode::DecodeFailed,
            ClientError::Encode(_) => ErrorCode::InvalidRequest,
            ClientError::InvalidUrl(_) => ErrorCode::ConfigError,
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Convert into the user-facing error
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::with_message(self.code(), self.to_string());
        match self.status() {
            Some(status) => err.with_detail("status", status),
            None => err,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        err.to_app_error()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
