//! Order domain logic: status state machine, actions and payment validation
//!
//! Pure, UI-agnostic rules. Nothing here mutates an order or performs I/O;
//! the client crate applies these rules before issuing external calls.

pub mod action;
pub mod payment;
pub mod status;

pub use action::OrderAction;
pub use payment::{PaymentMethod, PaymentRequest, PaymentResult};
pub use status::check_transition;
