//! Order lifecycle management and stock consumption

use std::sync::Arc;

use shared::{parse_amount, IngredientKey, Order, OrderStatus};

use crate::error::{AppError, AppResult};
use crate::store::{InventoryStore, OrderStore};

/// Order service over an injected store
#[derive(Clone)]
pub struct OrderService<S> {
    store: Arc<S>,
}

impl<S> OrderService<S>
where
    S: OrderStore + InventoryStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Move an order to a new status
    ///
    /// Rejects transitions the lifecycle does not allow. When an order
    /// is collected, the ingredients it consumed are deducted from
    /// storeroom stock.
    pub async fn transition(&self, order_id: &str, to: OrderStatus) -> AppResult<Order> {
        let order = self
            .store
            .get_order(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        if !order.status.can_transition_to(to) {
            return Err(AppError::InvalidStateTransition(format!(
                "order {} cannot move from {} to {}",
                order.id,
                order.status.as_str(),
                to.as_str()
            )));
        }

        let updated = self.store.set_status(order_id, to).await?;

        if to == OrderStatus::Collected {
            self.consume_stock(&updated).await?;
        }

        Ok(updated)
    }

    /// Deduct a collected order's ingredients from stock
    ///
    /// Same tolerance policy as aggregation: lines with unparseable
    /// amounts are skipped, and a line with no key-matching inventory
    /// item leaves stock untouched. The store's decrement is atomic and
    /// clamps at zero.
    async fn consume_stock(&self, order: &Order) -> AppResult<()> {
        for line in &order.ingredients {
            let amount = match parse_amount(&line.amount) {
                Ok(amount) => amount,
                Err(err) => {
                    tracing::warn!(
                        order_id = %order.id,
                        ingredient = %line.name,
                        %err,
                        "skipping stock deduction for unparseable amount"
                    );
                    continue;
                }
            };

            let key = IngredientKey::new(&line.name, &line.unit);
            match self.store.find_item(&key).await? {
                Some(item) => {
                    let new_stock = self.store.decrement_stock(&item.id, amount).await?;
                    tracing::info!(
                        order_id = %order.id,
                        item = %item.name,
                        %amount,
                        %new_stock,
                        "stock consumed for collected order"
                    );
                }
                None => {
                    tracing::warn!(
                        order_id = %order.id,
                        ingredient = %line.name,
                        unit = %line.unit,
                        "no matching inventory item for collected ingredient"
                    );
                }
            }
        }
        Ok(())
    }
}
