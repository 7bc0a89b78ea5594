//! Validation utilities for the Food Technology Class Management system

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::InventoryItem;
use crate::types::DateWindow;

/// Why an ingredient amount failed to parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,

    #[error("amount is not a decimal number: {0:?}")]
    NotANumber(String),
}

/// Parse a demand line's free-text amount as a decimal
///
/// Aggregation skips lines whose amount does not parse; the tagged error
/// makes that policy explicit rather than relying on a NaN convention.
/// Negative values parse successfully and pass through unchanged.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }
    Decimal::from_str(trimmed).map_err(|_| AmountParseError::NotANumber(raw.to_string()))
}

/// Validate a query window before any aggregation work begins
pub fn validate_window(window: &DateWindow) -> Result<(), &'static str> {
    if window.from > window.to {
        return Err("window start must not be after window end");
    }
    Ok(())
}

/// Validate an inventory item as entered by a teacher
///
/// Called by the inventory management surface before an item document is
/// created or updated; aggregation itself trusts stored items.
pub fn validate_inventory_item(item: &InventoryItem) -> Result<(), &'static str> {
    if item.name.trim().is_empty() {
        return Err("Item name must not be empty");
    }
    if item.current_stock < Decimal::ZERO {
        return Err("Current stock cannot be negative");
    }
    if item.min_level < Decimal::ZERO {
        return Err("Minimum level cannot be negative");
    }
    Ok(())
}
