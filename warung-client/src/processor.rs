//! Payment settlement
//!
//! Validates a payment against the local order snapshot, then issues exactly
//! one call to the payment collaborator. Settlement is all-or-nothing: on
//! collaborator failure nothing is mutated and the failure is surfaced
//! verbatim.

use crate::api::OrderApi;
use crate::error::{ClientError, ClientResult};
use shared::error::AppResult;
use shared::models::Order;
use shared::order::{PaymentRequest, PaymentResult};
use std::sync::Arc;

/// Validates and settles cash/QR payments
pub struct PaymentProcessor {
    api: Arc<dyn OrderApi>,
}

impl PaymentProcessor {
    /// Create a processor backed by the given collaborator
    pub fn new(api: Arc<dyn OrderApi>) -> Self {
        Self { api }
    }

    /// Validate a request against an order, returning the change due
    ///
    /// Pure; rejected requests never reach the collaborator.
    pub fn validate(&self, order: &Order, request: &PaymentRequest) -> AppResult<i64> {
        request.validate(order)
    }

    /// Validate and settle a payment
    ///
    /// On success the returned result carries the authoritative updated
    /// order (payment status PAID) and the exact change computed during
    /// validation.
    pub async fn settle(
        &self,
        order: &Order,
        request: &PaymentRequest,
    ) -> ClientResult<PaymentResult> {
        let change = self.validate(order, request)?;

        let result = self.api.submit_payment(request).await?;
        if !result.success {
            // The server refused after our local validation passed; its
            // reason passes through verbatim when it gave one.
            let reason = result.message.unwrap_or_else(|| {
                format!("Payment rejected for order {} without a reason", request.order_number)
            });
            return Err(ClientError::Api(reason));
        }
        if !result.updated_order.is_paid() {
            return Err(ClientError::InvalidResponse(format!(
                "Settled order {} is not marked PAID",
                result.updated_order.order_number
            )));
        }

        tracing::info!(
            order_number = %request.order_number,
            method = ?request.method,
            change,
            "Payment settled"
        );

        Ok(PaymentResult { change, ..result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::models::{Menu, OrderItem, OrderStatus, PaymentStatus};

    /// Collaborator that refuses every payment, optionally with a reason
    struct RejectingApi {
        reason: Option<String>,
    }

    #[async_trait]
    impl OrderApi for RejectingApi {
        async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
            Ok(vec![])
        }

        async fn fetch_menus(&self) -> ClientResult<Vec<Menu>> {
            Ok(vec![])
        }

        async fn update_status(
            &self,
            _order_id: i64,
            _target: OrderStatus,
        ) -> ClientResult<Order> {
            unimplemented!("status updates are not under test")
        }

        async fn submit_payment(&self, _request: &PaymentRequest) -> ClientResult<PaymentResult> {
            Ok(PaymentResult {
                success: false,
                change: 0,
                message: self.reason.clone(),
                updated_order: order(),
            })
        }
    }

    fn order() -> Order {
        Order {
            id: 1,
            order_number: "ORD-001".to_string(),
            customer_name: None,
            items: vec![OrderItem { menu_id: 1, quantity: 1 }],
            total: 50_000,
            status: OrderStatus::Ready,
            payment_status: PaymentStatus::Pending,
            created_at: 0,
            update_seq: 1,
        }
    }

    #[tokio::test]
    async fn test_rejection_reason_passes_through_verbatim() {
        let api = Arc::new(RejectingApi {
            reason: Some("Jumlah uang tidak cukup".to_string()),
        });
        let processor = PaymentProcessor::new(api);

        let err = processor
            .settle(&order(), &PaymentRequest::cash("ORD-001", 50_000))
            .await
            .unwrap_err();
        assert!(matches!(&err, ClientError::Api(msg) if msg == "Jumlah uang tidak cukup"));
    }

    #[tokio::test]
    async fn test_rejection_without_reason_names_the_order() {
        let api = Arc::new(RejectingApi { reason: None });
        let processor = PaymentProcessor::new(api);

        let err = processor
            .settle(&order(), &PaymentRequest::cash("ORD-001", 50_000))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("ORD-001"));
    }
}
