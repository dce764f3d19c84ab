//! Analytics wire records
//!
//! Fixed-shape responses get a struct. Responses whose series set depends
//! on the data (per-branch, per-method, per-category breakdowns) are kept
//! as [`Record`] maps and interpreted by a declared series schema.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One loosely-shaped analytics row, e.g. `{"name": "Mon", "CASH": 12.5}`
pub type Record = serde_json::Map<String, Value>;

/// Headline order counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderStats {
    pub total_orders: u64,
    pub paid_orders: u64,
    pub pending_orders: u64,
    pub cancelled_orders: u64,
}

/// `{name, value}` pair used by most share and ranking endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Number of orders containing a given number of items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketSizeBucket {
    /// Item count label; the service sends numbers, and strings such as `"10+"`
    #[serde(deserialize_with = "string_or_number")]
    pub items: String,
    #[serde(default)]
    pub count: u64,
}

/// Ticket value histogram bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRange {
    pub range: String,
    #[serde(default)]
    pub count: u64,
}

/// Ticket value distribution plus the average ticket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketSize {
    pub distribution: Vec<TicketRange>,
    pub average: f64,
}

/// One cell of the weekday x hour cash inflow grid
///
/// `day_index` is 0 for Monday, `hour_index` 0..24.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub day_index: i64,
    pub hour_index: i64,
    #[serde(default)]
    pub value: f64,
}

/// Typed access to [`Record`] fields
pub trait RecordExt {
    /// Numeric value of `key`, accepting JSON numbers and numeric strings
    fn number(&self, key: &str) -> Option<f64>;

    /// First present label among `keys`, rendered as text
    fn label(&self, keys: &[&str]) -> Option<String>;
}

impl RecordExt for Record {
    fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn label(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|k| match self.get(*k)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(i) => i.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}
