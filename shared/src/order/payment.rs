//! Payment request validation
//!
//! Validates a cash or QR payment against an order before anything is sent
//! to the payment collaborator. Insufficient tender is a hard failure,
//! never floored to zero change.

use crate::error::{AppError, AppResult};
use crate::models::Order;
use serde::{Deserialize, Serialize};

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    QrCode,
}

/// Payment request sent to the payment collaborator
///
/// Carries exactly one of `cash_amount` (CASH) or `qr_data` (QR_CODE).
/// Ephemeral; never cached by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub order_number: String,
    #[serde(rename = "paymentMethod")]
    pub method: PaymentMethod,
    /// Cash tendered in the smallest currency unit (CASH only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_amount: Option<i64>,
    /// Opaque transaction reference (QR_CODE only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_data: Option<String>,
}

impl PaymentRequest {
    /// Build a cash payment request
    pub fn cash(order_number: impl Into<String>, cash_amount: i64) -> Self {
        Self {
            order_number: order_number.into(),
            method: PaymentMethod::Cash,
            cash_amount: Some(cash_amount),
            qr_data: None,
        }
    }

    /// Build a QR payment request
    pub fn qr(order_number: impl Into<String>, qr_data: impl Into<String>) -> Self {
        Self {
            order_number: order_number.into(),
            method: PaymentMethod::QrCode,
            cash_amount: None,
            qr_data: Some(qr_data.into()),
        }
    }

    /// Validate this request against the order being paid
    ///
    /// Returns the change due (always 0 for QR; `cash_amount - total` for
    /// cash). Checks, in order: the request targets this order, the order
    /// is not already paid, the request shape matches its method, and the
    /// tender covers the total.
    pub fn validate(&self, order: &Order) -> AppResult<i64> {
        if self.order_number != order.order_number {
            return Err(AppError::order_mismatch(&order.order_number, &self.order_number));
        }
        if order.is_paid() {
            return Err(AppError::already_paid(&order.order_number));
        }

        match self.method {
            PaymentMethod::Cash => {
                if self.qr_data.is_some() {
                    return Err(AppError::validation("Cash payment must not carry qrData"));
                }
                let tendered = self
                    .cash_amount
                    .ok_or_else(|| AppError::validation("Cash payment requires cashAmount"))?;
                if tendered < 0 {
                    return Err(AppError::validation("cashAmount must not be negative"));
                }
                if tendered < order.total {
                    return Err(AppError::insufficient_amount(tendered, order.total));
                }
                Ok(tendered - order.total)
            }
            PaymentMethod::QrCode => {
                if self.cash_amount.is_some() {
                    return Err(AppError::validation("QR payment must not carry cashAmount"));
                }
                match self.qr_data.as_deref() {
                    Some(reference) if !reference.trim().is_empty() => Ok(0),
                    _ => Err(AppError::missing_reference()),
                }
            }
        }
    }
}

/// Result of a settled payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub success: bool,
    /// Change due in the smallest currency unit; only meaningful for cash
    #[serde(default)]
    pub change: i64,
    /// Failure reason from the collaborator, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Authoritative order state after settlement
    pub updated_order: Order,
}
