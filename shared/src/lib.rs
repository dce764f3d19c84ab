//! Shared types for the POS dashboard
//!
//! Domain vocabulary used by both the data client and the UI layer:
//! analytics filters, wire records returned by the analytics service,
//! CRUD entities with their drafts, and the unified error system.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
pub use types::{ParseEnumError, Period, SplitBy, Tier};
