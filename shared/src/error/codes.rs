//! Unified error codes for the dashboard
//!
//! Codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Network errors
//! - 4xxx: Data errors
//! - 5xxx: Persistence errors
//! - 8xxx: Entity errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 3xxx: Network ====================
    /// No response received
    NetworkError = 3001,
    /// Request timed out
    TimeoutError = 3002,
    /// Non-success HTTP status
    HttpStatus = 3003,
    /// Client configuration is invalid
    ConfigError = 3004,

    // ==================== 4xxx: Data ====================
    /// Response body could not be decoded
    DecodeFailed = 4001,
    /// Response decoded but does not match the endpoint contract
    UnexpectedShape = 4002,

    // ==================== 5xxx: Persistence ====================
    /// Saving an entity failed
    SaveFailed = 5001,

    // ==================== 8xxx: Entity ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Role not found
    RoleNotFound = 8002,
    /// Stock item not found
    StockItemNotFound = 8003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth / Permission
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::PermissionDenied => "Permission denied",

            // Network
            ErrorCode::NetworkError => "Could not reach the server",
            ErrorCode::TimeoutError => "The server took too long to respond",
            ErrorCode::HttpStatus => "The server returned an error status",
            ErrorCode::ConfigError => "Client configuration is invalid",

            // Data
            ErrorCode::DecodeFailed => "The server response could not be read",
            ErrorCode::UnexpectedShape => "The server response has an unexpected shape",

            // Persistence
            ErrorCode::SaveFailed => "Saving failed",

            // Entity
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::RoleNotFound => "Role not found",
            ErrorCode::StockItemNotFound => "Stock item not found",

            // System
            ErrorCode::InternalError => "Internal error",
        }
    }

    /// Map a non-success HTTP status onto the most specific code
    pub fn from_http_status(status: u16) -> Self {
        match StatusCode::from_u16(status) {
            Ok(StatusCode::UNAUTHORIZED) => ErrorCode::NotAuthenticated,
            Ok(StatusCode::FORBIDDEN) => ErrorCode::PermissionDenied,
            Ok(StatusCode::NOT_FOUND) => ErrorCode::NotFound,
            Ok(StatusCode::CONFLICT) => ErrorCode::AlreadyExists,
            Ok(StatusCode::BAD_REQUEST) | Ok(StatusCode::UNPROCESSABLE_ENTITY) => {
                ErrorCode::ValidationFailed
            }
            Ok(StatusCode::REQUEST_TIMEOUT) | Ok(StatusCode::GATEWAY_TIMEOUT) => {
                ErrorCode::TimeoutError
            }
            _ => ErrorCode::HttpStatus,
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            1001 => Ok(ErrorCode::NotAuthenticated),
            2001 => Ok(ErrorCode::PermissionDenied),

            3001 => Ok(ErrorCode::NetworkError),
            3002 => Ok(ErrorCode::TimeoutError),
            3003 => Ok(ErrorCode::HttpStatus),
            3004 => Ok(ErrorCode::ConfigError),

            4001 => Ok(ErrorCode::DecodeFailed),
            4002 => Ok(ErrorCode::UnexpectedShape),

            5001 => Ok(ErrorCode::SaveFailed),

            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::RoleNotFound),
            8003 => Ok(ErrorCode::StockItemNotFound),

            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NetworkError.code(), 3001);
        assert_eq!(ErrorCode::DecodeFailed.code(), 4001);
        assert_eq!(ErrorCode::SaveFailed.code(), 5001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&ErrorCode::HttpStatus).unwrap(), "3003");
        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::DecodeFailed);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_http_status() {
        assert_eq!(ErrorCode::from_http_status(401), ErrorCode::NotAuthenticated);
        assert_eq!(ErrorCode::from_http_status(404), ErrorCode::NotFound);
        assert_eq!(ErrorCode::from_http_status(422), ErrorCode::ValidationFailed);
        assert_eq!(ErrorCode::from_http_status(504), ErrorCode::TimeoutError);
        assert_eq!(ErrorCode::from_http_status(500), ErrorCode::HttpStatus);
        assert_eq!(ErrorCode::from_http_status(418), ErrorCode::HttpStatus);
    }

    #[test]
    fn test_roundtrip() {
        for code in [
            ErrorCode::Unknown,
            ErrorCode::TimeoutError,
            ErrorCode::UnexpectedShape,
            ErrorCode::RoleNotFound,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }
}
