//! Unified error codes for the warung workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed (bad input shape, malformed amount)
    ValidationFailed = 2,

    // ==================== 4xxx: Order ====================
    /// Order not found in the local snapshot
    OrderNotFound = 4001,
    /// Requested status is not the defined successor of the current status
    InvalidTransition = 4002,
    /// Another mutation is already in flight for this order
    OrderBusy = 4003,
    /// Order must be paid before it can be completed
    PaymentRequired = 4004,

    // ==================== 5xxx: Payment ====================
    /// Cash tendered is below the order total
    InsufficientAmount = 5001,
    /// QR payment is missing its transaction reference
    MissingReference = 5002,
    /// Payment request targets a different order
    OrderMismatch = 5003,
    /// Order has already been paid
    AlreadyPaid = 5004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Operation timeout
    TimeoutError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Check if this is a domain conflict (stable reason code, never retried)
    #[inline]
    pub const fn is_domain(&self) -> bool {
        matches!(
            self,
            ErrorCode::OrderNotFound
                | ErrorCode::InvalidTransition
                | ErrorCode::OrderBusy
                | ErrorCode::PaymentRequired
                | ErrorCode::InsufficientAmount
                | ErrorCode::MissingReference
                | ErrorCode::OrderMismatch
                | ErrorCode::AlreadyPaid
        )
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",

            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidTransition => "Invalid order status transition",
            ErrorCode::OrderBusy => "Order has a mutation in flight",
            ErrorCode::PaymentRequired => "Order must be paid before completion",

            ErrorCode::InsufficientAmount => "Cash tendered is below the order total",
            ErrorCode::MissingReference => "QR transaction reference is missing",
            ErrorCode::OrderMismatch => "Payment does not match this order",
            ErrorCode::AlreadyPaid => "Order has already been paid",

            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidTransition),
            4003 => Ok(ErrorCode::OrderBusy),
            4004 => Ok(ErrorCode::PaymentRequired),
            5001 => Ok(ErrorCode::InsufficientAmount),
            5002 => Ok(ErrorCode::MissingReference),
            5003 => Ok(ErrorCode::OrderMismatch),
            5004 => Ok(ErrorCode::AlreadyPaid),
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),
            other => Err(format!("Unknown error code: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidTransition,
            ErrorCode::OrderBusy,
            ErrorCode::InsufficientAmount,
            ErrorCode::AlreadyPaid,
            ErrorCode::NetworkError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(1234).is_err());
    }

    #[test]
    fn test_domain_classification() {
        assert!(ErrorCode::OrderBusy.is_domain());
        assert!(ErrorCode::AlreadyPaid.is_domain());
        assert!(!ErrorCode::NetworkError.is_domain());
        assert!(!ErrorCode::ValidationFailed.is_domain());
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ErrorCode::InvalidTransition).unwrap();
        assert_eq!(json, "4002");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::InvalidTransition);
    }
}
