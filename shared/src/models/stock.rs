//! Stock Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{validate_not_blank, validate_not_negative};

/// Inventory stock item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: i64,
    pub item_name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub unit: Option<String>,
    /// Quantity at or below which the item needs restocking
    #[serde(default)]
    pub reorder_level: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_cost: Decimal,
}

/// Create / update stock payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct StockDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(custom(function = "validate_not_blank", message = "Item name is required"))]
    pub item_name: String,

    pub category: Option<String>,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i64,

    pub unit: Option<String>,

    #[validate(range(min = 0, message = "Reorder level cannot be negative"))]
    pub reorder_level: i64,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_cost: Decimal,
}

impl From<&StockItem> for StockDraft {
    fn from(s: &StockItem) -> Self {
        Self {
            id: Some(s.id),
            item_name: s.item_name.clone(),
            category: s.category.clone(),
            quantity: s.quantity,
            unit: s.unit.clone(),
            reorder_level: s.reorder_level,
            unit_cost: s.unit_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_negative_values_are_rejected() {
        let draft = StockDraft {
            item_name: "Milk".into(),
            quantity: -1,
            unit_cost: Decimal::from_str("-0.50").unwrap(),
            ..StockDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("quantity"));
        assert!(fields.contains_key("unit_cost"));
    }

    #[test]
    fn test_unit_cost_serializes_as_number() {
        let draft = StockDraft {
            item_name: "Beans".into(),
            unit_cost: Decimal::from_str("3.25").unwrap(),
            ..StockDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["unit_cost"], serde_json::json!(3.25));
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_optional_columns_default() {
        let item: StockItem = serde_json::from_value(serde_json::json!({
            "id": 4, "item_name": "Cups", "quantity": 5, "unit_cost": 0.5
        }))
        .unwrap();
        assert_eq!(item.reorder_level, 0);
        assert!(item.category.is_none());
    }
}
