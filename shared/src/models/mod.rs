//! Data models shared across the workspace

pub mod menu;
pub mod order;

pub use menu::Menu;
pub use order::{Order, OrderItem, OrderStatus, PaymentStatus};
