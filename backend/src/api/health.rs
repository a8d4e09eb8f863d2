//! Health check endpoint

use crate::api::envelope::ApiResponse;
use crate::services::{DataService, HealthInfo};
use axum::response::Json;
use tracing::info;

/// GET /api/health - Version and current timestamp; never fails
pub async fn health_check() -> Json<ApiResponse<HealthInfo>> {
    info!("Health check endpoint called");
    Json(ApiResponse::ok_with_message(
        DataService::health(),
        "Server is running",
    ))
}
