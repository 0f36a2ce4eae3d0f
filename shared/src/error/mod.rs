//! Error handling for the warung workspace
//!
//! Provides structured error codes and error types shared between the
//! domain logic and the client crates.

pub mod codes;
pub mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
