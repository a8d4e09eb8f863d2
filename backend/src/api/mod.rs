//! API module
//!
//! Contains HTTP request handlers, the response envelope, and the router

pub mod bookings;
pub mod documents;
pub mod envelope;
pub mod health;
pub mod middleware;
pub mod recommendations;
pub mod utils;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use envelope::ApiResponse;

/// Build the application router with all routes and middleware
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        // Named documents
        .route("/api/user_profile", get(documents::get_user_profile))
        .route("/api/itinerary", get(documents::get_itinerary))
        .route(
            "/api/generate_itinerary",
            post(documents::generate_itinerary),
        )
        .route("/api/hidden_gems", get(documents::get_hidden_gems))
        .route("/api/local_guides", get(documents::get_local_guides))
        .route("/api/festivals", get(documents::get_festivals))
        .route(
            "/api/community_stories",
            get(documents::get_community_stories),
        )
        .route("/api/hotels", get(documents::get_hotels))
        // Writes
        .route("/api/bookings", post(bookings::add_booking))
        .route("/api/ai_recommendations", post(recommendations::ai_recommendations))
        .method_not_allowed_fallback(middleware::method_not_allowed)
        .fallback(middleware::not_found)
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
