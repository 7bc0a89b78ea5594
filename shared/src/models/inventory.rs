//! Storeroom inventory models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A storeroom inventory item
///
/// `current_stock` is the authoritative quantity on hand, in the item's
/// native unit. Aggregation only ever reads it; stock is consumed by the
/// order-completion path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub current_stock: Decimal,
    pub unit: String,
    pub min_level: Decimal,
}

/// Stock level relative to the item's configured minimum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Ok,
    Medium,
    Low,
}

impl InventoryItem {
    /// Classify current stock against `min_level`
    ///
    /// Low at half the minimum or below, Medium at the minimum or below.
    /// Drives the status badge on the inventory page; demand-relative
    /// grading lives in restock detection instead.
    pub fn stock_level(&self) -> StockLevel {
        let half_min = self.min_level / Decimal::from(2);
        if self.current_stock <= half_min {
            StockLevel::Low
        } else if self.current_stock <= self.min_level {
            StockLevel::Medium
        } else {
            StockLevel::Ok
        }
    }
}
