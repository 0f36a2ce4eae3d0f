//! End-to-end walkthrough of the cashier core against an in-memory backend.
//!
//! Drives one order through the full lifecycle (confirm, prepare, ready,
//! cash settlement, complete), merges a push event from a second cashier
//! session and prints the dashboard after each step.
//!
//! Run with: cargo run -p warung-client --example cashier_dashboard

use async_trait::async_trait;
use chrono::Utc;
use shared::message::PushMessage;
use shared::models::{Menu, Order, OrderItem, OrderStatus, PaymentStatus};
use shared::order::{OrderAction, PaymentRequest, PaymentResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use warung_client::{ClientError, ClientResult, OrderApi, OrderSyncCoordinator, ReportRange};

/// Minimal in-memory backend; a real deployment uses `warung_client::HttpClient`
struct InMemoryBackend {
    orders: Mutex<HashMap<i64, Order>>,
    menus: Vec<Menu>,
}

#[async_trait]
impl OrderApi for InMemoryBackend {
    async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        Ok(self.orders.lock().unwrap().values().cloned().collect())
    }

    async fn fetch_menus(&self) -> ClientResult<Vec<Menu>> {
        Ok(self.menus.clone())
    }

    async fn update_status(&self, order_id: i64, target: OrderStatus) -> ClientResult<Order> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .get_mut(&order_id)
            .ok_or_else(|| ClientError::Api(format!("Order {} not found", order_id)))?;
        order.status = target;
        order.update_seq += 1;
        Ok(order.clone())
    }

    async fn submit_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentResult> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .values_mut()
            .find(|o| o.order_number == request.order_number)
            .ok_or_else(|| ClientError::Api(format!("Order {} not found", request.order_number)))?;
        order.payment_status = PaymentStatus::Paid;
        order.update_seq += 1;
        Ok(PaymentResult {
            success: true,
            change: 0,
            message: None,
            updated_order: order.clone(),
        })
    }
}

fn seed_order(id: i64, customer: &str, total: i64) -> Order {
    Order {
        id,
        order_number: format!("ORD-{:03}", id),
        customer_name: Some(customer.to_string()),
        items: vec![OrderItem { menu_id: 1, quantity: 2 }],
        total,
        status: OrderStatus::Pending,
        payment_status: PaymentStatus::Pending,
        created_at: Utc::now().timestamp_millis(),
        update_seq: 1,
    }
}

fn print_dashboard(coordinator: &OrderSyncCoordinator) {
    let metrics = coordinator.compute_dashboard(&ReportRange::today());
    println!(
        "  dashboard: revenue=Rp{} orders={} pending={} menus={}",
        metrics.today_revenue, metrics.today_orders, metrics.pending_orders, metrics.available_menus
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,warung_client=debug".into()),
        )
        .init();

    let backend = Arc::new(InMemoryBackend {
        orders: Mutex::new(HashMap::from([(1, seed_order(1, "Budi", 50_000))])),
        menus: vec![
            Menu { id: 1, name: "Nasi Goreng".into(), price: 25_000, available: true },
            Menu { id: 2, name: "Es Teh".into(), price: 5_000, available: true },
        ],
    });

    let coordinator = Arc::new(OrderSyncCoordinator::new(backend));
    coordinator.refresh().await?;

    let mut events = coordinator.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(?event, "coordinator event");
        }
    });

    println!("Seeded one PENDING order:");
    print_dashboard(&coordinator);

    for action in [OrderAction::Confirm, OrderAction::Prepare, OrderAction::MarkReady] {
        let order = coordinator.dispatch(1, action).await?;
        println!("Order {} is now {:?}", order.order_number, order.status);
    }

    // Completion before payment is rejected; settle first.
    if let Err(err) = coordinator.dispatch(1, OrderAction::Complete).await {
        println!("Completion blocked as expected: {}", err);
    }

    let payment = OrderAction::Pay(PaymentRequest::cash("ORD-001", 60_000));
    let order = coordinator.dispatch(1, payment).await?;
    println!("Order {} settled, payment status {:?}", order.order_number, order.payment_status);

    let order = coordinator.dispatch(1, OrderAction::Complete).await?;
    println!("Order {} is now {:?}", order.order_number, order.status);
    print_dashboard(&coordinator);

    // An order from another cashier session arrives over the push channel.
    let mut pushed = seed_order(2, "Siti", 30_000);
    pushed.update_seq = 7;
    coordinator.apply_push(PushMessage::OrderUpdated(pushed));
    println!("Merged a push event from another session:");
    print_dashboard(&coordinator);

    Ok(())
}
