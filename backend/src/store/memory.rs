//! In-memory store for deterministic, fixture-driven testing

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use uuid::Uuid;

use shared::{
    ClassSection, DateWindow, IngredientKey, InventoryItem, Notification, Order, OrderStatus, Role,
    ShoppingListSnapshot, User,
};

use crate::error::{AppError, AppResult};

use super::{
    ClassStore, InventoryStore, NotificationStore, OrderStore, SnapshotStore, UserStore,
};

/// In-memory implementation of every store trait
///
/// A single mutex guards all collections, so `decrement_stock` satisfies
/// the atomic clamped-at-zero contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    orders: Vec<Order>,
    inventory: Vec<InventoryItem>,
    classes: Vec<ClassSection>,
    users: Vec<User>,
    snapshots: Vec<ShoppingListSnapshot>,
    notifications: Vec<Notification>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_order(&self, order: Order) {
        self.inner.lock().await.orders.push(order);
    }

    pub async fn insert_item(&self, item: InventoryItem) {
        self.inner.lock().await.inventory.push(item);
    }

    pub async fn insert_class(&self, class: ClassSection) {
        self.inner.lock().await.classes.push(class);
    }

    pub async fn insert_user(&self, user: User) {
        self.inner.lock().await.users.push(user);
    }

    /// Snapshot of persisted shopping lists, for assertions
    pub async fn snapshots(&self) -> Vec<ShoppingListSnapshot> {
        self.inner.lock().await.snapshots.clone()
    }

    /// Recorded notification documents, for assertions
    pub async fn notifications(&self) -> Vec<Notification> {
        self.inner.lock().await.notifications.clone()
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn orders_in_window(&self, window: &DateWindow) -> AppResult<Vec<Order>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .orders
            .iter()
            .filter(|o| window.contains(o.date))
            .cloned()
            .collect())
    }

    async fn orders_for_class_in_window(
        &self,
        class_id: &str,
        window: &DateWindow,
    ) -> AppResult<Vec<Order>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .orders
            .iter()
            .filter(|o| o.class_id == class_id && window.contains(o.date))
            .cloned()
            .collect())
    }

    async fn get_order(&self, id: &str) -> AppResult<Option<Order>> {
        let inner = self.inner.lock().await;
        Ok(inner.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn set_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let mut inner = self.inner.lock().await;
        let order = inner
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::NotFound("Order".to_string()))?;
        order.status = status;
        Ok(order.clone())
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list_items(&self) -> AppResult<Vec<InventoryItem>> {
        Ok(self.inner.lock().await.inventory.clone())
    }

    async fn find_item(&self, key: &IngredientKey) -> AppResult<Option<InventoryItem>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .inventory
            .iter()
            .find(|item| IngredientKey::new(&item.name, &item.unit) == *key)
            .cloned())
    }

    async fn decrement_stock(&self, item_id: &str, amount: Decimal) -> AppResult<Decimal> {
        let mut inner = self.inner.lock().await;
        let item = inner
            .inventory
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| AppError::NotFound("Inventory item".to_string()))?;
        item.current_stock = (item.current_stock - amount).max(Decimal::ZERO);
        Ok(item.current_stock)
    }
}

#[async_trait]
impl ClassStore for MemoryStore {
    async fn list_classes(&self) -> AppResult<Vec<ClassSection>> {
        Ok(self.inner.lock().await.classes.clone())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn teachers(&self) -> AppResult<Vec<User>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .users
            .iter()
            .filter(|u| u.role == Role::Teacher)
            .cloned()
            .collect())
    }

    async fn students_in_class(&self, class_id: &str) -> AppResult<Vec<User>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .users
            .iter()
            .filter(|u| u.role == Role::Student && u.class_id.as_deref() == Some(class_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn save_snapshot(&self, snapshot: ShoppingListSnapshot) -> AppResult<Uuid> {
        let id = snapshot.id;
        self.inner.lock().await.snapshots.push(snapshot);
        Ok(id)
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn push(&self, notification: Notification) -> AppResult<()> {
        self.inner.lock().await.notifications.push(notification);
        Ok(())
    }
}
