//! Named document API handlers
//!
//! Read-only endpoints that return a stored JSON document verbatim, plus the
//! placeholder itinerary generator.

use crate::api::envelope::ApiResponse;
use crate::api::utils::parse_optional_json;
use crate::error::AppError;
use crate::services::DataService;
use crate::state::{AppState, NamedDocument};
use axum::{body::Bytes, extract::State, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

async fn read_document(
    state: &AppState,
    document: NamedDocument,
) -> Result<Json<ApiResponse>, AppError> {
    let data = DataService::get_document(state, document).await?;
    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/user_profile
pub async fn get_user_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, AppError> {
    info!("User profile endpoint called");
    read_document(&state, NamedDocument::UserProfile).await
}

/// GET /api/itinerary
pub async fn get_itinerary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, AppError> {
    info!("Itinerary endpoint called");
    read_document(&state, NamedDocument::Itineraries).await
}

/// POST /api/generate_itinerary - Returns the stored itineraries for any body
pub async fn generate_itinerary(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    info!("Generate itinerary endpoint called");
    let request: Option<Value> = parse_optional_json(&body);
    let data = DataService::generate_itinerary(&state, request).await?;
    Ok(Json(ApiResponse::ok(data)))
}

/// GET /api/hidden_gems
pub async fn get_hidden_gems(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, AppError> {
    info!("Hidden gems endpoint called");
    read_document(&state, NamedDocument::HiddenGems).await
}

/// GET /api/local_guides
pub async fn get_local_guides(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, AppError> {
    info!("Local guides endpoint called");
    read_document(&state, NamedDocument::LocalGuides).await
}

/// GET /api/festivals
pub async fn get_festivals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, AppError> {
    info!("Festivals endpoint called");
    read_document(&state, NamedDocument::Festivals).await
}

/// GET /api/community_stories
pub async fn get_community_stories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, AppError> {
    info!("Community stories endpoint called");
    read_document(&state, NamedDocument::CommunityStories).await
}

/// GET /api/hotels
pub async fn get_hotels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, AppError> {
    info!("Hotels endpoint called");
    let data = DataService::get_hotels(&state).await?;
    Ok(Json(ApiResponse::ok(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_get_festivals() {
        let dir = tempdir().expect("Failed to create temp dir");
        std::fs::write(
            dir.path().join("festivals.json"),
            r#"{"events":[{"name":"Losar"}]}"#,
        )
        .expect("Failed to write fixture");
        let state = Arc::new(AppState::new(Config::with_data_dir(dir.path())));

        let Json(response) = get_festivals(State(state)).await.unwrap();
        assert_eq!(response, ApiResponse::ok(json!({"events": [{"name": "Losar"}]})));
    }

    #[tokio::test]
    async fn test_missing_document_is_500() {
        let dir = tempdir().expect("Failed to create temp dir");
        let state = Arc::new(AppState::new(Config::with_data_dir(dir.path())));

        let err = get_hidden_gems(State(state)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_generate_itinerary_accepts_garbage_body() {
        let dir = tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("itineraries.json"), r#"[{"day":1}]"#)
            .expect("Failed to write fixture");
        let state = Arc::new(AppState::new(Config::with_data_dir(dir.path())));

        let Json(response) = generate_itinerary(State(state), Bytes::from_static(b"<xml/>"))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.data, Some(json!([{"day": 1}])));
    }
}
