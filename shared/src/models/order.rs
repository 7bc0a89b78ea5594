//! Student recipe orders and their lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// pending -> approved/rejected, approved -> prepared/collected,
/// prepared -> collected. Rejected and collected are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
    Prepared,
    Collected,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Prepared => "prepared",
            OrderStatus::Collected => "collected",
        }
    }

    /// Whether the status can move to `to` in one step
    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        matches!(
            (self, to),
            (OrderStatus::Pending, OrderStatus::Approved)
                | (OrderStatus::Pending, OrderStatus::Rejected)
                | (OrderStatus::Approved, OrderStatus::Prepared)
                | (OrderStatus::Approved, OrderStatus::Collected)
                | (OrderStatus::Prepared, OrderStatus::Collected)
        )
    }

    /// Whether no further transition exists; order views use this to
    /// lock editing on closed orders
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Rejected | OrderStatus::Collected)
    }
}

/// Ingredient demand line as carried on an order
///
/// `amount` is untrusted free text entered by students; it is intended to
/// be a non-negative decimal literal but nothing guarantees that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

/// A student's ingredient order for one class session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub class_id: String,
    pub class_name: String,
    pub date: DateTime<Utc>,
    pub recipe_id: String,
    pub recipe_name: String,
    pub ingredients: Vec<IngredientLine>,
    pub status: OrderStatus,
}
