//! Shopping list types produced by the aggregation engine

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator between the name and unit parts of a grouping key.
/// NUL cannot occur in either field, so distinct pairs never collide.
const KEY_SEPARATOR: char = '\u{0}';

/// Canonical grouping key for an (ingredient name, unit) pair
///
/// Both parts are lower-cased, so keys are case-insensitive. Two demand
/// lines merge if and only if their keys are identical; the same name in
/// different units yields different keys (no unit conversion exists).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct IngredientKey(String);

impl IngredientKey {
    pub fn new(name: &str, unit: &str) -> Self {
        Self(format!(
            "{}{}{}",
            name.to_lowercase(),
            KEY_SEPARATOR,
            unit.to_lowercase()
        ))
    }
}

/// One aggregated line of the shopping list
///
/// `name` and `unit` carry the spelling of the first demand line that
/// landed in the bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListEntry {
    pub name: String,
    pub unit: String,
    pub required: Decimal,
    pub in_stock: Decimal,
    pub to_order: Decimal,
}

/// Aggregated demand reconciled against stock, keyed by ingredient key
///
/// Zero-deficit entries are retained; callers wanting only what needs
/// buying filter on `to_order > 0` via [`ShoppingList::to_order`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShoppingList {
    pub items: HashMap<IngredientKey, ShoppingListEntry>,
}

impl ShoppingList {
    pub fn get(&self, name: &str, unit: &str) -> Option<&ShoppingListEntry> {
        self.items.get(&IngredientKey::new(name, unit))
    }

    /// Entries with a positive deficit
    pub fn to_order(&self) -> impl Iterator<Item = &ShoppingListEntry> {
        self.items.values().filter(|e| e.to_order > Decimal::ZERO)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Lifecycle of a persisted shopping list snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotStatus {
    Pending,
    Purchased,
}

/// Immutable dated record of a generated shopping list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListSnapshot {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub items: ShoppingList,
    pub status: SnapshotStatus,
    pub generated_by: String,
}

/// Shopping categories used to group the teacher dashboard view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IngredientCategory {
    DryGoods,
    Dairy,
    Spices,
    Oils,
    Other,
}

impl IngredientCategory {
    /// Categorize an ingredient by substring match on its name
    pub fn for_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if ["flour", "sugar", "rice"].iter().any(|s| name.contains(s)) {
            IngredientCategory::DryGoods
        } else if ["milk", "cheese", "butter"].iter().any(|s| name.contains(s)) {
            IngredientCategory::Dairy
        } else if ["pepper", "salt"].iter().any(|s| name.contains(s)) {
            IngredientCategory::Spices
        } else if name.contains("oil") {
            IngredientCategory::Oils
        } else {
            IngredientCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::DryGoods => "Dry Goods",
            IngredientCategory::Dairy => "Dairy",
            IngredientCategory::Spices => "Spices",
            IngredientCategory::Oils => "Oils",
            IngredientCategory::Other => "Other",
        }
    }
}
