//! Query state machine

use shared::error::{AppError, ErrorCode};

use crate::ClientError;

/// Cloneable summary of a failed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub code: ErrorCode,
    pub message: String,
    /// HTTP status when the server answered
    pub status: Option<u16>,
}

impl From<&ClientError> for QueryError {
    fn from(err: &ClientError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            status: err.status(),
        }
    }
}

impl From<ClientError> for QueryError {
    fn from(err: ClientError) -> Self {
        Self::from(&err)
    }
}

impl From<&QueryError> for AppError {
    fn from(err: &QueryError) -> Self {
        let app = AppError::with_message(err.code, err.message.clone());
        match err.status {
            Some(status) => app.with_detail("status", status),
            None => app,
        }
    }
}

/// Lifecycle of one Query Key instance
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Nothing requested yet
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request succeeded
    Success(T),
    /// The latest request failed; no data is retained
    Error(QueryError),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

impl<T> QueryState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// Success or Error
    pub fn is_settled(&self) -> bool {
        matches!(self, QueryState::Success(_) | QueryState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match self {
            QueryState::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Loading => QueryState::Loading,
            QueryState::Success(data) => QueryState::Success(f(data)),
            QueryState::Error(err) => QueryState::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let s: QueryState<u32> = QueryState::default();
        assert!(s.is_idle());
        assert!(!s.is_settled());

        let s = QueryState::Success(3);
        assert_eq!(s.data(), Some(&3));
        assert!(s.is_settled());
        assert_eq!(s.map(|v| v * 2), QueryState::Success(6));

        let s: QueryState<u32> = QueryState::Error(ClientError::Timeout.into());
        assert_eq!(s.error().map(|e| e.code), Some(ErrorCode::TimeoutError));
        assert!(s.data().is_none());
    }

    #[test]
    fn test_query_error_to_app_error() {
        let err = QueryError::from(ClientError::Http {
            status: 404,
            body: String::new(),
        });
        let app = AppError::from(&err);
        assert_eq!(app.code, ErrorCode::NotFound);
        assert_eq!(app.detail("status"), Some(&serde_json::json!(404)));
    }
}
