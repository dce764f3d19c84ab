//! Data models
//!
//! Wire records returned by the analytics service and the CRUD entities
//! edited through modal forms. Drafts carry their own validation rules.

pub mod analytics;
pub mod employee;
pub mod role;
pub mod stock;
mod validation;

// Re-exports
pub use analytics::*;
pub use employee::*;
pub use role::*;
pub use stock::*;
