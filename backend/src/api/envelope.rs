//! Response envelope
//!
//! Every endpoint answers with `{ success, data, message }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform response wrapper
///
/// `message` is always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload on success, `null` on failure
    pub data: Option<T>,
    /// Human-readable description, required on failure
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data` and no message
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Successful response carrying both `data` and a message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// Failed response with no data
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}
