//! Abstract REST collaborator
//!
//! The coordinator talks to the server exclusively through this trait, so
//! tests and embedded deployments can substitute an in-memory
//! implementation for [`crate::HttpClient`].

use crate::error::ClientResult;
use async_trait::async_trait;
use shared::models::{Menu, Order, OrderStatus};
use shared::order::{PaymentRequest, PaymentResult};

/// Operations the cashier backend exposes to this core
///
/// Every mutation returns the authoritative server state; the coordinator
/// never trusts its own optimistic view over a response.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Fetch all orders, newest first
    async fn fetch_orders(&self) -> ClientResult<Vec<Order>>;

    /// Fetch the menu catalog
    async fn fetch_menus(&self) -> ClientResult<Vec<Menu>>;

    /// Request a status change; the server validates and returns the
    /// updated order
    async fn update_status(&self, order_id: i64, target: OrderStatus) -> ClientResult<Order>;

    /// Submit a payment; the server settles it and returns the result
    async fn submit_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentResult>;
}
