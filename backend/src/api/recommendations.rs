//! Recommendation API handlers
//!
//! Reserved endpoint; answers 501 until recommendations exist.

use crate::api::utils::parse_optional_json;
use crate::error::AppError;
use crate::services::DataService;
use axum::body::Bytes;
use serde_json::Value;
use tracing::info;

/// POST /api/ai_recommendations - Always 501, whatever the body
pub async fn ai_recommendations(body: Bytes) -> AppError {
    info!("AI recommendations endpoint called");
    let request: Option<Value> = parse_optional_json(&body);
    DataService::ai_recommendations(request)
}
