//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` and render the standard failure envelope.

use crate::api::envelope::ApiResponse;
use crate::state::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// A read endpoint could not load its document (missing, unreadable, or
    /// not valid JSON)
    ///
    /// Missing files are reported as 500 here, unlike the booking path.
    #[error("{0}")]
    Document(#[from] StoreError),

    /// No document is registered under the requested logical name
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// The hotel-booking document does not exist
    #[error("Hotels data file not found")]
    BookingTargetMissing,

    /// The booking could not be persisted
    #[error("Error updating booking data: {0}")]
    BookingWrite(#[source] StoreError),

    /// Request body could not be interpreted
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    /// Feature is a placeholder
    #[error("This endpoint is planned for future implementation")]
    NotImplemented,

    /// No route matches the request
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// The route exists but doesn't accept this method
    #[error("Method {method} not allowed for {path}")]
    MethodNotAllowed {
        /// Request method
        method: String,
        /// Request path
        path: String,
    },
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Document(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UnknownDocument(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BookingTargetMissing => StatusCode::NOT_FOUND,
            AppError::BookingWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ApiResponse::<Value>::failure(self.to_string()));

        (status, body).into_response()
    }
}
