//! Booking API handlers

use crate::api::envelope::ApiResponse;
use crate::api::utils::parse_required_json;
use crate::error::AppError;
use crate::services::DataService;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, response::Json};
use std::sync::Arc;
use tracing::info;

/// POST /api/bookings - Append the submitted record to the booking document
///
/// Responds with the record itself. A missing booking document is a 404;
/// every other failure is a 500.
pub async fn add_booking(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    info!("Add booking endpoint called");
    let record = parse_required_json(&body)?;
    let data = DataService::add_booking(&state, record).await?;
    Ok(Json(ApiResponse::ok(data)))
}
