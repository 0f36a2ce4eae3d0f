//! Shared types for the warung cashier workspace
//!
//! Common types used across crates: order and menu models, the order
//! status state machine, payment validation, error codes, push-channel
//! payloads and the REST response envelope.

pub mod error;
pub mod message;
pub mod models;
pub mod order;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use message::PushMessage;
pub use models::{Menu, Order, OrderItem, OrderStatus, PaymentStatus};
pub use order::{OrderAction, PaymentMethod, PaymentRequest, PaymentResult};
pub use response::ApiResponse;
