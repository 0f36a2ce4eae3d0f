//! Order sync coordinator
//!
//! Owns the locally cached, server-confirmed snapshot of every order and
//! serializes mutations so at most one status change or payment is in
//! flight per order. Concurrent attempts on the same order fail fast with
//! `OrderBusy` instead of racing. Push-channel events merge in by
//! last-write-wins on the server-assigned update sequence; the merge is
//! commutative and idempotent, so unordered or duplicated delivery is
//! harmless.

use crate::api::OrderApi;
use crate::dashboard::{self, DashboardMetrics, ReportRange};
use crate::error::{ClientError, ClientResult};
use crate::processor::PaymentProcessor;
use shared::error::{AppError, ErrorCode};
use shared::message::PushMessage;
use shared::models::{Order, OrderStatus};
use shared::order::{OrderAction, check_transition};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Notification emitted to the presentation layer and the aggregator
#[derive(Debug, Clone)]
pub enum CoordinatorEvent {
    /// An order's authoritative state changed (mutation confirmed or push merged)
    OrderChanged(Order),
    /// A dispatched operation failed; the snapshot was left untouched
    OperationFailed {
        order_id: i64,
        code: ErrorCode,
        message: String,
    },
    /// The whole snapshot was rebuilt from the server
    Refreshed,
}

#[derive(Default)]
struct SnapshotCache {
    orders: HashMap<i64, Order>,
    available_menus: usize,
}

/// Reconciles local order state against server responses and push events
pub struct OrderSyncCoordinator {
    api: Arc<dyn OrderApi>,
    processor: PaymentProcessor,
    cache: Mutex<SnapshotCache>,
    in_flight: Mutex<HashSet<i64>>,
    events: broadcast::Sender<CoordinatorEvent>,
}

/// Releases the per-order mutation reservation on every exit path
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<i64>>,
    order_id: i64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .expect("in-flight lock poisoned")
            .remove(&self.order_id);
    }
}

impl OrderSyncCoordinator {
    /// Create a coordinator backed by the given REST collaborator
    pub fn new(api: Arc<dyn OrderApi>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            processor: PaymentProcessor::new(api.clone()),
            api,
            cache: Mutex::new(SnapshotCache::default()),
            in_flight: Mutex::new(HashSet::new()),
            events,
        }
    }

    /// Subscribe to coordinator notifications
    pub fn subscribe(&self) -> broadcast::Receiver<CoordinatorEvent> {
        self.events.subscribe()
    }

    /// Rebuild the snapshot cache from the server
    pub async fn refresh(&self) -> ClientResult<()> {
        let orders = self.api.fetch_orders().await?;
        let menus = self.api.fetch_menus().await?;

        {
            let mut cache = self.cache.lock().expect("cache lock poisoned");
            cache.orders = orders.into_iter().map(|o| (o.id, o)).collect();
            cache.available_menus = menus.iter().filter(|m| m.available).count();
            tracing::debug!(orders = cache.orders.len(), "Snapshot refreshed");
        }

        self.emit(CoordinatorEvent::Refreshed);
        Ok(())
    }

    /// Current server-confirmed view of all orders, newest first
    pub fn current_snapshot(&self) -> Vec<Order> {
        let cache = self.cache.lock().expect("cache lock poisoned");
        let mut orders: Vec<Order> = cache.orders.values().cloned().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        orders
    }

    /// Compute dashboard metrics from the current snapshot
    pub fn compute_dashboard(&self, range: &ReportRange) -> DashboardMetrics {
        let cache = self.cache.lock().expect("cache lock poisoned");
        dashboard::compute(cache.orders.values(), cache.available_menus, range)
    }

    /// Dispatch a mutation against an order
    ///
    /// Validates the action against the cached snapshot, issues exactly one
    /// external call, and on success merges the authoritative server response
    /// into the cache under the same last-write-wins rule as the push path,
    /// then emits [`CoordinatorEvent::OrderChanged`]. Every failure leaves
    /// the snapshot in its last-known-good state and emits
    /// [`CoordinatorEvent::OperationFailed`].
    pub async fn dispatch(&self, order_id: i64, action: OrderAction) -> ClientResult<Order> {
        let result = self.dispatch_inner(order_id, &action).await;

        match &result {
            Ok(order) => self.emit(CoordinatorEvent::OrderChanged(order.clone())),
            Err(err) => {
                tracing::warn!(order_id, ?action, error = %err, "Dispatch failed");
                self.emit(CoordinatorEvent::OperationFailed {
                    order_id,
                    code: failure_code(err),
                    message: err.to_string(),
                });
            }
        }

        result
    }

    async fn dispatch_inner(&self, order_id: i64, action: &OrderAction) -> ClientResult<Order> {
        let _guard = self.begin_mutation(order_id)?;

        let snapshot = {
            let cache = self.cache.lock().expect("cache lock poisoned");
            cache
                .orders
                .get(&order_id)
                .cloned()
                .ok_or_else(|| AppError::order_not_found(order_id))?
        };

        let updated = match action {
            OrderAction::Pay(request) => {
                let result = self.processor.settle(&snapshot, request).await?;
                result.updated_order
            }
            status_action => {
                let target = status_action
                    .target_status()
                    .expect("non-payment action always targets a status");
                check_transition(snapshot.status, target)?;
                // READY -> COMPLETED requires settlement first; route the UI
                // through the payment processor, never silently skip.
                if target == OrderStatus::Completed && !snapshot.is_paid() {
                    return Err(AppError::payment_required(&snapshot.order_number).into());
                }
                self.api.update_status(order_id, target).await?
            }
        };

        Ok(self.store_authoritative(updated))
    }

    /// Merge an out-of-band push event into the snapshot
    ///
    /// Last-write-wins by `update_seq`; stale events are dropped, duplicate
    /// events are no-ops. Emits [`CoordinatorEvent::OrderChanged`] only when
    /// the cached state actually changed.
    pub fn apply_push(&self, message: PushMessage) {
        let PushMessage::OrderUpdated(order) = message;

        let changed = {
            let mut cache = self.cache.lock().expect("cache lock poisoned");
            match cache.orders.get(&order.id) {
                Some(existing) if order.update_seq < existing.update_seq => {
                    tracing::warn!(
                        order_id = order.id,
                        push_seq = order.update_seq,
                        local_seq = existing.update_seq,
                        "Ignoring stale push event"
                    );
                    false
                }
                Some(existing) if *existing == order => false,
                _ => {
                    cache.orders.insert(order.id, order.clone());
                    true
                }
            }
        };

        if changed {
            tracing::debug!(order_id = order.id, seq = order.update_seq, "Push merged");
            self.emit(CoordinatorEvent::OrderChanged(order));
        }
    }

    /// Reserve the order for a single in-flight mutation
    fn begin_mutation(&self, order_id: i64) -> ClientResult<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock().expect("in-flight lock poisoned");
        if !in_flight.insert(order_id) {
            return Err(AppError::order_busy(order_id).into());
        }
        Ok(InFlightGuard {
            in_flight: &self.in_flight,
            order_id,
        })
    }

    /// Merge an authoritative server response into the cache
    ///
    /// Last-write-wins by `update_seq`, exactly like [`Self::apply_push`]:
    /// a response that lost the race against a fresher push must not roll
    /// the snapshot back. Returns the winning cached state.
    fn store_authoritative(&self, order: Order) -> Order {
        let mut cache = self.cache.lock().expect("cache lock poisoned");
        match cache.orders.get(&order.id) {
            Some(existing) if order.update_seq < existing.update_seq => {
                tracing::warn!(
                    order_id = order.id,
                    response_seq = order.update_seq,
                    local_seq = existing.update_seq,
                    "Mutation response superseded by a fresher push"
                );
                existing.clone()
            }
            _ => {
                cache.orders.insert(order.id, order.clone());
                order
            }
        }
    }

    fn emit(&self, event: CoordinatorEvent) {
        // No receivers is fine; the dashboard may not be open.
        let _ = self.events.send(event);
    }
}

fn failure_code(err: &ClientError) -> ErrorCode {
    if let Some(code) = err.reason_code() {
        code
    } else if err.is_transport() {
        ErrorCode::NetworkError
    } else {
        ErrorCode::InternalError
    }
}
