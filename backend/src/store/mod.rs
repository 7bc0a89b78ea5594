//! Data-provider abstraction over the document store
//!
//! The engine and jobs depend on these traits rather than a concrete
//! database client, so any storage backend can be substituted and tests
//! run against fixture data.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{
    ClassSection, DateWindow, IngredientKey, InventoryItem, Notification, Order, OrderStatus,
    ShoppingListSnapshot, User,
};

use crate::error::AppResult;

/// Read and mutate student orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Orders whose date falls within the window, inclusive
    async fn orders_in_window(&self, window: &DateWindow) -> AppResult<Vec<Order>>;

    /// Orders for one class whose date falls within the window
    async fn orders_for_class_in_window(
        &self,
        class_id: &str,
        window: &DateWindow,
    ) -> AppResult<Vec<Order>>;

    async fn get_order(&self, id: &str) -> AppResult<Option<Order>>;

    /// Persist a status change and return the updated order
    async fn set_status(&self, id: &str, status: OrderStatus) -> AppResult<Order>;
}

/// Read inventory and consume stock
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list_items(&self) -> AppResult<Vec<InventoryItem>>;

    /// Look up the item whose normalized (name, unit) key matches
    async fn find_item(&self, key: &IngredientKey) -> AppResult<Option<InventoryItem>>;

    /// Subtract `amount` from an item's stock and return the new level.
    ///
    /// Implementations must apply the decrement atomically and clamp the
    /// result at zero; two concurrent consumers of the same item must
    /// not lose an update.
    async fn decrement_stock(&self, item_id: &str, amount: Decimal) -> AppResult<Decimal>;
}

/// Read class sections
#[async_trait]
pub trait ClassStore: Send + Sync {
    async fn list_classes(&self) -> AppResult<Vec<ClassSection>>;
}

/// Read user profiles
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn teachers(&self) -> AppResult<Vec<User>>;

    async fn students_in_class(&self, class_id: &str) -> AppResult<Vec<User>>;
}

/// Persist generated shopping list snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn save_snapshot(&self, snapshot: ShoppingListSnapshot) -> AppResult<Uuid>;
}

/// Record in-app notification documents
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn push(&self, notification: Notification) -> AppResult<()>;
}
