//! Entry points invoked by the external scheduler
//!
//! The cadence (weekly list generation, daily reminder scan) lives in
//! the scheduler collaborator; these functions only do the work of one
//! run.

use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use shared::{
    DateWindow, Notification, OrderStatus, ShoppingListSnapshot, SnapshotStatus,
};

use crate::config::ScheduleConfig;
use crate::error::AppResult;
use crate::services::shopping_list::build_shopping_list;
use crate::store::{
    ClassStore, InventoryStore, NotificationStore, OrderStore, SnapshotStore, UserStore,
};

/// Marker recorded on snapshots produced by a scheduled run
pub const GENERATED_BY_SYSTEM: &str = "system";

/// Generate the shopping list for the upcoming window and persist it as
/// an immutable dated snapshot, notifying every teacher
pub async fn generate_weekly_shopping_list<S>(
    store: &S,
    config: &ScheduleConfig,
) -> AppResult<ShoppingListSnapshot>
where
    S: OrderStore + InventoryStore + SnapshotStore + UserStore + NotificationStore,
{
    let window = DateWindow::upcoming(config.lookahead_days);
    let eligible: HashSet<OrderStatus> = config.eligible_statuses.iter().copied().collect();

    let orders = store.orders_in_window(&window).await?;
    let inventory = store.list_items().await?;
    tracing::info!(
        orders = orders.len(),
        items = inventory.len(),
        "generating weekly shopping list"
    );

    let items = build_shopping_list(&orders, &inventory, &window, &eligible, None)?;

    let snapshot = ShoppingListSnapshot {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        items,
        status: SnapshotStatus::Pending,
        generated_by: GENERATED_BY_SYSTEM.to_string(),
    };
    store.save_snapshot(snapshot.clone()).await?;

    let teachers = store.teachers().await?;
    for teacher in &teachers {
        store
            .push(Notification::new(
                teacher.id.clone(),
                "Weekly Shopping List Generated",
                "The shopping list for the upcoming week has been generated.",
                format!("/shopping-lists/{}", snapshot.id),
            ))
            .await?;
    }
    tracing::info!(
        snapshot_id = %snapshot.id,
        teachers = teachers.len(),
        "weekly shopping list saved"
    );

    Ok(snapshot)
}

/// Remind students who have not yet ordered for an upcoming class
///
/// For each class with submissions missing in the reminder window, every
/// enrolled student without an order gets a reminder notification.
/// Returns how many reminders were recorded.
pub async fn send_order_reminders<S>(store: &S, config: &ScheduleConfig) -> AppResult<usize>
where
    S: OrderStore + ClassStore + UserStore + NotificationStore,
{
    let window = DateWindow::upcoming(config.reminder_window_days);
    let mut sent = 0;

    for class in store.list_classes().await? {
        let orders = store.orders_for_class_in_window(&class.id, &window).await?;
        if orders.len() as u32 >= class.students {
            continue;
        }

        let submitted: HashSet<&str> = orders.iter().map(|o| o.student_id.as_str()).collect();
        for student in store.students_in_class(&class.id).await? {
            if submitted.contains(student.id.as_str()) {
                continue;
            }
            store
                .push(Notification::new(
                    student.id.clone(),
                    "Reminder: Submit Your Recipe Order",
                    format!(
                        "Please submit your recipe order for the upcoming class in {}.",
                        class.name
                    ),
                    "/dashboard/student",
                ))
                .await?;
            sent += 1;
        }
    }

    tracing::info!(sent, "order reminders recorded");
    Ok(sent)
}
