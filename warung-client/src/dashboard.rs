//! Dashboard aggregation
//!
//! Pure functions over the order snapshot set. Metrics are recomputed from
//! scratch on every snapshot change, never incrementally maintained.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::models::Order;

/// Fixed reference timezone for calendar-day boundaries (Asia/Jakarta, WIB)
const REFERENCE_OFFSET_SECS: i32 = 7 * 3600;

/// How many orders the dashboard lists as recent
const RECENT_ORDERS_LIMIT: usize = 5;

fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_OFFSET_SECS).expect("valid fixed offset")
}

/// Inclusive calendar-day range in the reference timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportRange {
    /// Range spanning `start..=end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Single-day range
    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Today in the reference timezone
    pub fn today() -> Self {
        Self::day(Utc::now().with_timezone(&reference_offset()).date_naive())
    }

    /// Whether an epoch-millis timestamp falls inside this range
    pub fn contains(&self, timestamp_millis: i64) -> bool {
        match DateTime::<Utc>::from_timestamp_millis(timestamp_millis) {
            Some(instant) => {
                let date = instant.with_timezone(&reference_offset()).date_naive();
                date >= self.start && date <= self.end
            }
            None => false,
        }
    }
}

/// Summary metrics the dashboard renders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Sum of totals over PAID orders created in range
    pub today_revenue: i64,
    /// Orders created in range, regardless of status
    pub today_orders: u64,
    /// Orders still moving through fulfillment (not COMPLETED/CANCELLED),
    /// counted over the whole snapshot
    pub pending_orders: u64,
    pub available_menus: u64,
    /// Most recent orders in range, newest first
    pub recent_orders: Vec<Order>,
}

impl DashboardMetrics {
    /// All-zero metrics for an empty snapshot
    pub fn empty() -> Self {
        Self {
            today_revenue: 0,
            today_orders: 0,
            pending_orders: 0,
            available_menus: 0,
            recent_orders: Vec::new(),
        }
    }
}

/// Compute dashboard metrics from an order snapshot set
///
/// Idempotent and side-effect-free.
pub fn compute<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    available_menus: usize,
    range: &ReportRange,
) -> DashboardMetrics {
    let mut metrics = DashboardMetrics::empty();
    metrics.available_menus = available_menus as u64;

    let mut in_range: Vec<&Order> = Vec::new();
    for order in orders {
        if !order.is_terminal() {
            metrics.pending_orders += 1;
        }
        if range.contains(order.created_at) {
            metrics.today_orders += 1;
            if order.is_paid() {
                metrics.today_revenue += order.total;
            }
            in_range.push(order);
        }
    }

    in_range.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    metrics.recent_orders = in_range
        .into_iter()
        .take(RECENT_ORDERS_LIMIT)
        .cloned()
        .collect();

    metrics
}

/// Millis timestamp for midnight of `date` in the reference timezone;
/// handy for building fixtures and reports
pub fn day_start_millis(date: NaiveDate) -> i64 {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_local_timezone(reference_offset())
        .single()
        .expect("fixed offset has no gaps");
    midnight.timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderStatus, PaymentStatus};

    fn order(id: i64, total: i64, created_at: i64) -> Order {
        Order {
            id,
            order_number: format!("ORD-{:03}", id),
            customer_name: None,
            items: vec![],
            total,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            created_at,
            update_seq: 0,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_snapshot_all_zero() {
        let metrics = compute([], 0, &ReportRange::today());
        assert_eq!(metrics, DashboardMetrics::empty());
    }

    #[test]
    fn test_revenue_counts_only_paid_in_range() {
        let day = date(2025, 11, 17);
        let ts = day_start_millis(day) + 3_600_000;

        let mut paid = order(1, 50_000, ts);
        paid.payment_status = PaymentStatus::Paid;
        let unpaid = order(2, 30_000, ts);
        let mut paid_yesterday = order(3, 70_000, ts - 86_400_000);
        paid_yesterday.payment_status = PaymentStatus::Paid;

        let orders = [paid, unpaid, paid_yesterday];
        let metrics = compute(orders.iter(), 4, &ReportRange::day(day));

        assert_eq!(metrics.today_revenue, 50_000);
        assert_eq!(metrics.today_orders, 2);
        assert_eq!(metrics.available_menus, 4);
    }

    #[test]
    fn test_pending_counts_whole_snapshot() {
        let day = date(2025, 11, 17);
        let ts = day_start_millis(day);

        let mut done = order(1, 10_000, ts);
        done.status = OrderStatus::Completed;
        let mut cancelled = order(2, 10_000, ts - 86_400_000);
        cancelled.status = OrderStatus::Cancelled;
        let mut preparing = order(3, 10_000, ts - 86_400_000);
        preparing.status = OrderStatus::Preparing;
        let pending = order(4, 10_000, ts);

        let orders = [done, cancelled, preparing, pending];
        let metrics = compute(orders.iter(), 0, &ReportRange::day(day));

        // The out-of-range PREPARING order still counts as pending work.
        assert_eq!(metrics.pending_orders, 2);
        assert_eq!(metrics.today_orders, 2);
    }

    #[test]
    fn test_recent_orders_newest_first_capped() {
        let day = date(2025, 11, 17);
        let base = day_start_millis(day);

        let orders: Vec<Order> = (0..8).map(|i| order(i, 1_000, base + i * 60_000)).collect();
        let metrics = compute(orders.iter(), 0, &ReportRange::day(day));

        assert_eq!(metrics.recent_orders.len(), RECENT_ORDERS_LIMIT);
        assert_eq!(metrics.recent_orders[0].id, 7);
        assert_eq!(metrics.recent_orders[4].id, 3);
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        let day = date(2025, 11, 17);
        let range = ReportRange::day(day);

        let first_ms = day_start_millis(day);
        let last_ms = day_start_millis(date(2025, 11, 18)) - 1;

        assert!(range.contains(first_ms));
        assert!(range.contains(last_ms));
        assert!(!range.contains(first_ms - 1));
        assert!(!range.contains(last_ms + 1));
    }

    #[test]
    fn test_day_boundary_uses_reference_timezone() {
        // 2025-11-17 23:00 UTC is already 2025-11-18 06:00 in Jakarta.
        let utc_evening = date(2025, 11, 17)
            .and_hms_opt(23, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        assert!(!ReportRange::day(date(2025, 11, 17)).contains(utc_evening));
        assert!(ReportRange::day(date(2025, 11, 18)).contains(utc_evening));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let day = date(2025, 11, 17);
        let orders = vec![order(1, 5_000, day_start_millis(day))];
        let range = ReportRange::day(day);
        let a = compute(orders.iter(), 2, &range);
        let b = compute(orders.iter(), 2, &range);
        assert_eq!(a, b);
    }
}
