//! Order Model

use serde::{Deserialize, Serialize};

/// Customer label used when no name was captured at the counter
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// Order fulfillment status
///
/// The happy path is a strict chain PENDING -> CONFIRMED -> PREPARING ->
/// READY -> COMPLETED. CANCELLED is reachable only from PENDING. The
/// transition table itself lives in [`crate::order::status`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Terminal states accept no further transitions
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Wire name of the status, as the API expects it in query strings
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Payment status of an order
///
/// May only become PAID through a successful settlement referencing this
/// exact order and an amount covering its total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

/// Single line of an order: a menu reference and a quantity (>= 1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_id: i64,
    pub quantity: u32,
}

/// Order entity as served by the cashier API
///
/// The core never creates or deletes orders; it only transitions
/// `status`/`payment_status`. `total` is fixed at order creation and is
/// expressed in the smallest currency unit (IDR has no subunit).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Stable numeric key assigned by the server
    pub id: i64,
    /// Human-facing order number, unique and immutable once assigned
    pub order_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub items: Vec<OrderItem>,
    /// Total amount in the smallest currency unit, derived at creation time
    pub total: i64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    /// Creation timestamp (epoch millis)
    pub created_at: i64,
    /// Server-assigned update sequence, monotonically increasing per order.
    /// Used for last-write-wins merge of push events; 0 when the server
    /// omits it, which makes every push authoritative.
    #[serde(default)]
    pub update_seq: u64,
}

impl Order {
    /// Display name for the customer, defaulting to the walk-in label
    pub fn customer_label(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(WALK_IN_CUSTOMER)
    }

    /// Check if the order has been settled
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// Check if the order is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
