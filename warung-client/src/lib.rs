//! Cashier-side controller for the warung ordering system
//!
//! UI-agnostic core behind the cashier dashboard: the order lifecycle
//! state machine, cash/QR payment settlement, snapshot synchronization
//! against the REST API and the live-update channel, and the dashboard
//! aggregator. A presentation layer drives it through
//! [`OrderSyncCoordinator::dispatch`] and renders whatever
//! [`OrderSyncCoordinator::subscribe`] emits.

pub mod api;
pub mod config;
pub mod coordinator;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod processor;

pub use api::OrderApi;
pub use config::ClientConfig;
pub use coordinator::{CoordinatorEvent, OrderSyncCoordinator};
pub use dashboard::{DashboardMetrics, ReportRange};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use processor::PaymentProcessor;
