//! Dispatchable order actions

use super::payment::PaymentRequest;
use crate::models::OrderStatus;

/// An action the presentation layer can dispatch against an order
///
/// Status actions map one-to-one onto transition targets; `Pay` routes
/// through payment validation and settlement instead.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    Confirm,
    Prepare,
    MarkReady,
    Complete,
    Cancel,
    Pay(PaymentRequest),
}

impl OrderAction {
    /// The status this action targets, or `None` for payment
    pub fn target_status(&self) -> Option<OrderStatus> {
        match self {
            OrderAction::Confirm => Some(OrderStatus::Confirmed),
            OrderAction::Prepare => Some(OrderStatus::Preparing),
            OrderAction::MarkReady => Some(OrderStatus::Ready),
            OrderAction::Complete => Some(OrderStatus::Completed),
            OrderAction::Cancel => Some(OrderStatus::Cancelled),
            OrderAction::Pay(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_action_targets() {
        assert_eq!(OrderAction::Confirm.target_status(), Some(OrderStatus::Confirmed));
        assert_eq!(OrderAction::Cancel.target_status(), Some(OrderStatus::Cancelled));
        let pay = OrderAction::Pay(PaymentRequest::cash("ORD-001", 1000));
        assert_eq!(pay.target_status(), None);
    }
}
