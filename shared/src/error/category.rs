//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Network errors (3xxx)
    Network,
    /// Data errors (4xxx)
    Data,
    /// Persistence errors (5xxx)
    Persistence,
    /// Entity errors (8xxx)
    Entity,
    /// System errors (everything else)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Network,
            4000..5000 => Self::Data,
            5000..6000 => Self::Persistence,
            8000..9000 => Self::Entity,
            _ => Self::System,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Network => "network",
            Self::Data => "data",
            Self::Persistence => "persistence",
            Self::Entity => "entity",
            Self::System => "system",
        }
    }

    /// Whether errors of this category come from talking to the server
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network | Self::Data)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
