//! Analytics filter types shared between client and UI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a wire string does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

// ============================================================================
// Period
// ============================================================================

/// Time window applied to analytics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "today")]
    Today,
    #[default]
    #[serde(rename = "7days")]
    SevenDays,
    #[serde(rename = "30days")]
    ThirtyDays,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "all")]
    All,
}

impl Period {
    /// All periods in selector order
    pub const ALL: [Period; 5] = [
        Period::Today,
        Period::SevenDays,
        Period::ThirtyDays,
        Period::OneYear,
        Period::All,
    ];

    /// Wire value used in the `period` query parameter
    pub const fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::SevenDays => "7days",
            Period::ThirtyDays => "30days",
            Period::OneYear => "1year",
            Period::All => "all",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "period",
                value: s.to_string(),
            })
    }
}

// ============================================================================
// SplitBy
// ============================================================================

/// Breakdown dimension for the order trend
///
/// `None` yields a single `value` series; every other variant yields one
/// series per observed member of the dimension (branch, method, type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitBy {
    #[default]
    None,
    Branch,
    PaymentMethod,
    OrderType,
}

impl SplitBy {
    pub const ALL: [SplitBy; 4] = [
        SplitBy::None,
        SplitBy::Branch,
        SplitBy::PaymentMethod,
        SplitBy::OrderType,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SplitBy::None => "none",
            SplitBy::Branch => "branch",
            SplitBy::PaymentMethod => "payment_method",
            SplitBy::OrderType => "order_type",
        }
    }

    pub const fn is_split(&self) -> bool {
        !matches!(self, SplitBy::None)
    }
}

impl fmt::Display for SplitBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitBy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SplitBy::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "split_by",
                value: s.to_string(),
            })
    }
}

// ============================================================================
// Tier
// ============================================================================

/// Loyalty membership level used to bucket wallet share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    NonMember,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Tier {
    /// Canonical display order
    pub const ORDER: [Tier; 6] = [
        Tier::NonMember,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Diamond,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Tier::NonMember => "Non-Member",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
        }
    }

    /// Match a tier label as sent by the analytics service (case-insensitive)
    pub fn from_label(label: &str) -> Option<Tier> {
        let label = label.trim();
        Tier::ORDER
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
    }

    /// Sort rank for a tier label; unknown labels sort after every known tier
    pub fn rank_of(label: &str) -> usize {
        Tier::from_label(label)
            .map(|t| t as usize)
            .unwrap_or(Tier::ORDER.len())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
