//! API utility functions
//!
//! Helpers for interpreting raw request bodies.

use crate::error::AppError;
use serde_json::Value;

/// Parse a body that may be absent or malformed
///
/// Returns `None` for an empty or non-JSON body instead of failing, for
/// endpoints that must accept anything.
pub fn parse_optional_json(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(body).ok()
}

/// Parse a body that must be valid JSON
///
/// # Returns
/// * `Ok(Value)` - The parsed payload, any JSON type
/// * `Err(AppError::InvalidPayload)` - Body is empty or not valid JSON
pub fn parse_required_json(body: &[u8]) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::InvalidPayload(e.to_string()))
}
