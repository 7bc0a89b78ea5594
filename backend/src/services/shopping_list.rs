//! Shopping-list aggregation engine
//!
//! Collects ingredient demand across eligible student orders, merges it
//! per normalized (name, unit) key, reconciles against storeroom stock,
//! and emits the deficit to buy. Pure computation; fetching the input
//! collections is the service wrapper's job.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rust_decimal::Decimal;

use shared::{
    parse_amount, validate_window, DateWindow, IngredientCategory, IngredientKey, InventoryItem,
    Order, OrderStatus, ShoppingList, ShoppingListEntry,
};

use crate::error::{AppError, AppResult};
use crate::store::{InventoryStore, OrderStore};

/// Build a shopping list from an order collection and an inventory snapshot
///
/// Orders outside `window` (inclusive bounds), outside `eligible`, or not
/// matching `class_id` (when given) contribute nothing. Lines whose
/// amount fails to parse are skipped and logged; malformed data in one
/// order never blocks the list for the rest. Buckets with no matching
/// inventory item get `in_stock = 0`: an item recorded in a different
/// unit is no match, since no unit conversion exists. The full bucket map
/// is returned, zero-deficit entries included.
pub fn build_shopping_list(
    orders: &[Order],
    inventory: &[InventoryItem],
    window: &DateWindow,
    eligible: &HashSet<OrderStatus>,
    class_id: Option<&str>,
) -> AppResult<ShoppingList> {
    validate_window(window).map_err(|msg| AppError::validation("window", msg))?;

    let stock_by_key: HashMap<IngredientKey, &InventoryItem> = inventory
        .iter()
        .map(|item| (IngredientKey::new(&item.name, &item.unit), item))
        .collect();

    let mut items: HashMap<IngredientKey, ShoppingListEntry> = HashMap::new();

    for order in orders {
        if !window.contains(order.date) {
            continue;
        }
        if !eligible.contains(&order.status) {
            continue;
        }
        if let Some(class_id) = class_id {
            if order.class_id != class_id {
                continue;
            }
        }

        for line in &order.ingredients {
            let amount = match parse_amount(&line.amount) {
                Ok(amount) => amount,
                Err(err) => {
                    tracing::warn!(
                        order_id = %order.id,
                        ingredient = %line.name,
                        %err,
                        "skipping demand line with unparseable amount"
                    );
                    continue;
                }
            };

            let key = IngredientKey::new(&line.name, &line.unit);
            let entry = items.entry(key.clone()).or_insert_with(|| {
                let in_stock = stock_by_key
                    .get(&key)
                    .map(|item| item.current_stock)
                    .unwrap_or(Decimal::ZERO);
                ShoppingListEntry {
                    name: line.name.clone(),
                    unit: line.unit.clone(),
                    required: Decimal::ZERO,
                    in_stock,
                    to_order: Decimal::ZERO,
                }
            });
            entry.required += amount;
        }
    }

    for entry in items.values_mut() {
        entry.to_order = (entry.required - entry.in_stock).max(Decimal::ZERO);
    }

    Ok(ShoppingList { items })
}

/// Group positive-deficit entries by shopping category, for the teacher
/// dashboard rendering
pub fn categorized_to_order(
    list: &ShoppingList,
) -> HashMap<IngredientCategory, Vec<ShoppingListEntry>> {
    let mut groups: HashMap<IngredientCategory, Vec<ShoppingListEntry>> = HashMap::new();
    for entry in list.to_order() {
        groups
            .entry(IngredientCategory::for_name(&entry.name))
            .or_default()
            .push(entry.clone());
    }
    // Stable order within each category
    for entries in groups.values_mut() {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }
    groups
}

/// Shopping-list service over an injected store
#[derive(Clone)]
pub struct ShoppingListService<S> {
    store: Arc<S>,
}

impl<S> ShoppingListService<S>
where
    S: OrderStore + InventoryStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch orders and inventory, then aggregate
    ///
    /// A store failure propagates untouched; no partial list is returned.
    pub async fn generate(
        &self,
        window: &DateWindow,
        eligible: &HashSet<OrderStatus>,
        class_id: Option<&str>,
    ) -> AppResult<ShoppingList> {
        let orders = self.store.orders_in_window(window).await?;
        let inventory = self.store.list_items().await?;
        build_shopping_list(&orders, &inventory, window, eligible, class_id)
    }
}
