//! Stock item form

use rust_decimal::Decimal;
use shared::models::{StockDraft, StockItem};

use super::{FormModel, NumericField};

#[derive(Debug, Clone, PartialEq)]
pub struct StockForm {
    id: Option<i64>,
    pub item_name: String,
    pub category: String,
    pub quantity: NumericField<i64>,
    pub unit: String,
    pub reorder_level: NumericField<i64>,
    pub unit_cost: NumericField<Decimal>,
}

impl StockForm {
    pub fn new() -> Self {
        Self {
            id: None,
            item_name: String::new(),
            category: String::new(),
            quantity: NumericField::new(0).with_min(0),
            unit: String::new(),
            reorder_level: NumericField::new(0).with_min(0),
            unit_cost: NumericField::new(Decimal::ZERO).with_min(Decimal::ZERO),
        }
    }

    pub fn edit(item: &StockItem) -> Self {
        Self {
            id: Some(item.id),
            item_name: item.item_name.clone(),
            category: item.category.clone().unwrap_or_default(),
            quantity: NumericField::new(item.quantity).with_min(0),
            unit: item.unit.clone().unwrap_or_default(),
            reorder_level: NumericField::new(item.reorder_level).with_min(0),
            unit_cost: NumericField::new(item.unit_cost).with_min(Decimal::ZERO),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Default for StockForm {
    fn default() -> Self {
        Self::new()
    }
}

fn optional(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

impl FormModel for StockForm {
    type Draft = StockDraft;

    const FIELDS: &'static [&'static str] = &["item_name", "quantity", "reorder_level", "unit_cost"];

    fn draft(&self) -> StockDraft {
        StockDraft {
            id: self.id,
            item_name: self.item_name.trim().to_string(),
            category: optional(&self.category),
            quantity: self.quantity.value(),
            unit: optional(&self.unit),
            reorder_level: self.reorder_level.value(),
            unit_cost: self.unit_cost.value(),
        }
    }

    fn on_blur(&mut self, field: &str) {
        match field {
            "quantity" => {
                self.quantity.blur();
            }
            "reorder_level" => {
                self.reorder_level.blur();
            }
            "unit_cost" => {
                self.unit_cost.blur();
            }
            _ => {}
        }
    }
}
