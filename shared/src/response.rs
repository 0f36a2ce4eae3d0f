//! REST response envelope
//!
//! The cashier API wraps every payload in `{ success, message, data }`.

use serde::{Deserialize, Serialize};

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response payload (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: "OK".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response with a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Unwrap the payload, or return the server's message as the error
    pub fn into_data(self) -> Result<T, String> {
        if self.success {
            self.data.ok_or_else(|| "Missing response data".to_string())
        } else {
            Err(self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_roundtrip() {
        let response = ApiResponse::success(42);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        let back: ApiResponse<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_data(), Ok(42));
    }

    #[test]
    fn test_error_message_passthrough() {
        let response: ApiResponse<i32> = ApiResponse::error("Jumlah uang tidak cukup");
        assert_eq!(response.into_data(), Err("Jumlah uang tidak cukup".to_string()));
    }

    #[test]
    fn test_success_without_data_is_invalid() {
        let json = r#"{"success":true,"message":"OK"}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        assert!(response.into_data().is_err());
    }
}
