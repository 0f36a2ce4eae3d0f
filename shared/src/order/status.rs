//! Order status state machine
//!
//! An explicit transition table replaces the ad-hoc status switches of the
//! old cashier frontend: each status has at most one successor, plus the
//! PENDING -> CANCELLED escape hatch. Terminal states accept nothing.

use crate::error::{AppError, AppResult};
use crate::models::OrderStatus;

impl OrderStatus {
    /// The unique successor in the fulfillment chain, if any
    pub const fn successor(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        }
    }

    /// All targets reachable from this status
    ///
    /// Cancellation is only permitted from PENDING; a confirmed order is
    /// already in the kitchen's hands.
    pub fn allowed_targets(&self) -> Vec<OrderStatus> {
        let mut targets = Vec::with_capacity(2);
        if let Some(next) = self.successor() {
            targets.push(next);
        }
        if *self == OrderStatus::Pending {
            targets.push(OrderStatus::Cancelled);
        }
        targets
    }

    /// Check whether `target` is a legal transition from this status
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.successor() == Some(target)
            || (*self == OrderStatus::Pending && target == OrderStatus::Cancelled)
    }
}

/// Validate a status transition, failing with `InvalidTransition` unless
/// `target` is the unique successor of `current` (or CANCELLED from PENDING)
pub fn check_transition(current: OrderStatus, target: OrderStatus) -> AppResult<()> {
    if current.can_transition_to(target) {
        Ok(())
    } else {
        Err(AppError::invalid_transition(current, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    #[test]
    fn test_happy_path_chain() {
        assert!(check_transition(OrderStatus::Pending, OrderStatus::Confirmed).is_ok());
        assert!(check_transition(OrderStatus::Confirmed, OrderStatus::Preparing).is_ok());
        assert!(check_transition(OrderStatus::Preparing, OrderStatus::Ready).is_ok());
        assert!(check_transition(OrderStatus::Ready, OrderStatus::Completed).is_ok());
    }

    #[test]
    fn test_cancel_only_from_pending() {
        assert!(check_transition(OrderStatus::Pending, OrderStatus::Cancelled).is_ok());
        for from in [OrderStatus::Confirmed, OrderStatus::Preparing, OrderStatus::Ready] {
            let err = check_transition(from, OrderStatus::Cancelled).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidTransition);
        }
    }

    #[test]
    fn test_terminal_states_accept_nothing() {
        for terminal in [OrderStatus::Completed, OrderStatus::Cancelled] {
            assert!(terminal.allowed_targets().is_empty());
            for target in ALL {
                assert!(check_transition(terminal, target).is_err());
            }
        }
    }

    #[test]
    fn test_every_other_pair_fails() {
        // Exhaustive: a transition succeeds iff the table allows it
        for from in ALL {
            for to in ALL {
                let expected = from.successor() == Some(to)
                    || (from == OrderStatus::Pending && to == OrderStatus::Cancelled);
                assert_eq!(
                    check_transition(from, to).is_ok(),
                    expected,
                    "transition {:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_no_skipping_ahead() {
        let err = check_transition(OrderStatus::Confirmed, OrderStatus::Completed).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert!(err.message.contains("Confirmed"));
    }
}
