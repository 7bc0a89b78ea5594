//! Restock detection over the aggregation output
//!
//! A read-only projection: flags shopping-list entries whose stock does
//! not cover demand and grades how far short it falls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::ShoppingList;

use crate::config::RestockConfig;

/// How far stock falls short of demand
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockSeverity {
    Medium,
    Low,
    VeryLow,
}

impl StockSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockSeverity::Medium => "Medium",
            StockSeverity::Low => "Low",
            StockSeverity::VeryLow => "Very Low",
        }
    }
}

/// A shopping-list entry flagged for restocking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestockAlert {
    pub name: String,
    pub unit: String,
    pub required: Decimal,
    pub in_stock: Decimal,
    pub severity: StockSeverity,
}

/// Flag entries where stock does not cover demand
///
/// Severity tiers against the configured fractions of `required`:
/// Very Low at `very_low_fraction` or below, Low at `low_fraction` or
/// below, Medium otherwise. Output is sorted by name so rendering is
/// deterministic.
pub fn detect_restock(list: &ShoppingList, config: &RestockConfig) -> Vec<RestockAlert> {
    let mut alerts: Vec<RestockAlert> = list
        .items
        .values()
        .filter(|entry| entry.in_stock <= entry.required)
        .map(|entry| RestockAlert {
            name: entry.name.clone(),
            unit: entry.unit.clone(),
            required: entry.required,
            in_stock: entry.in_stock,
            severity: severity_for(entry.in_stock, entry.required, config),
        })
        .collect();
    alerts.sort_by(|a, b| a.name.cmp(&b.name));
    alerts
}

fn severity_for(in_stock: Decimal, required: Decimal, config: &RestockConfig) -> StockSeverity {
    if in_stock <= required * config.very_low_fraction {
        StockSeverity::VeryLow
    } else if in_stock <= required * config.low_fraction {
        StockSeverity::Low
    } else {
        StockSeverity::Medium
    }
}
