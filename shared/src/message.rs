//! Push-channel payloads
//!
//! The live-update channel delivers already-decoded messages to the
//! coordinator. Delivery is unordered and may duplicate; the coordinator's
//! merge is idempotent, so duplicates are harmless.

use crate::models::Order;
use serde::{Deserialize, Serialize};

/// A message delivered over the push channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushMessage {
    /// An order changed out-of-band (e.g. from another cashier session)
    OrderUpdated(Order),
}

impl PushMessage {
    /// The order carried by this message
    pub fn order(&self) -> &Order {
        match self {
            PushMessage::OrderUpdated(order) => order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderStatus, PaymentStatus};

    #[test]
    fn test_envelope_format() {
        let order = Order {
            id: 5,
            order_number: "ORD-005".to_string(),
            customer_name: None,
            items: vec![],
            total: 25_000,
            status: OrderStatus::Confirmed,
            payment_status: PaymentStatus::Pending,
            created_at: 0,
            update_seq: 3,
        };
        let json = serde_json::to_string(&PushMessage::OrderUpdated(order)).unwrap();
        assert!(json.contains("\"event\":\"ORDER_UPDATED\""));
        let back: PushMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.order().order_number, "ORD-005");
    }
}
