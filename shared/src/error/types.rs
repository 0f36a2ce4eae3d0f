//! Error types shared by the domain logic and the client

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code
///
/// The primary error type for domain failures: a stable [`ErrorCode`]
/// plus a human-readable message. Domain errors are logic conflicts, not
/// transient faults, so callers must never retry them automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error (bad input shape, rejected before any external call)
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an order-not-found error
    pub fn order_not_found(order_id: i64) -> Self {
        Self::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", order_id))
    }

    /// Create an invalid-transition error
    pub fn invalid_transition(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        Self::with_message(
            ErrorCode::InvalidTransition,
            format!("Cannot transition order from {:?} to {:?}", from, to),
        )
    }

    /// Create an order-busy error
    pub fn order_busy(order_id: i64) -> Self {
        Self::with_message(
            ErrorCode::OrderBusy,
            format!("Order {} already has a mutation in flight", order_id),
        )
    }

    /// Create a payment-required error
    pub fn payment_required(order_number: &str) -> Self {
        Self::with_message(
            ErrorCode::PaymentRequired,
            format!("Order {} must be paid before completion", order_number),
        )
    }

    /// Create an insufficient-amount error
    pub fn insufficient_amount(tendered: i64, total: i64) -> Self {
        Self::with_message(
            ErrorCode::InsufficientAmount,
            format!("Cash tendered {} is below order total {}", tendered, total),
        )
    }

    /// Create a missing-reference error
    pub fn missing_reference() -> Self {
        Self::new(ErrorCode::MissingReference)
    }

    /// Create an order-mismatch error
    pub fn order_mismatch(expected: &str, got: &str) -> Self {
        Self::with_message(
            ErrorCode::OrderMismatch,
            format!("Payment references order {} but order {} is being paid", got, expected),
        )
    }

    /// Create an already-paid error
    pub fn already_paid(order_number: &str) -> Self {
        Self::with_message(
            ErrorCode::AlreadyPaid,
            format!("Order {} has already been paid", order_number),
        )
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::AlreadyPaid);
        assert_eq!(err.code, ErrorCode::AlreadyPaid);
        assert_eq!(err.message, "Order has already been paid");
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::OrderNotFound, "Order 42 not found");
        assert_eq!(format!("{}", err), "Order 42 not found");
    }

    #[test]
    fn test_convenience_constructors() {
        let err = AppError::insufficient_amount(40_000, 50_000);
        assert_eq!(err.code, ErrorCode::InsufficientAmount);
        assert!(err.message.contains("40000"));

        let err = AppError::order_busy(7);
        assert_eq!(err.code, ErrorCode::OrderBusy);

        let err = AppError::order_mismatch("ORD-001", "ORD-002");
        assert_eq!(err.code, ErrorCode::OrderMismatch);
        assert!(err.message.contains("ORD-002"));
    }
}
