//! Data service
//!
//! Reads named JSON documents and appends bookings. Handlers in `api` wrap
//! these results in the response envelope.

use crate::error::AppError;
use crate::state::{AppState, NamedDocument, StoreError};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

/// Version reported by the health check
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Field of the hotel-booking document that holds submitted bookings
pub const BOOKINGS_FIELD: &str = "bookings";

/// Health check payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInfo {
    /// Fixed service version
    pub version: String,
    /// Current time, ISO-8601 (UTC, microsecond precision)
    pub timestamp: String,
}

/// Data service operations
pub struct DataService;

impl DataService {
    /// Report the service version and the current time. Never fails.
    pub fn health() -> HealthInfo {
        HealthInfo {
            version: SERVICE_VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    /// Load a document by its logical name (e.g. `"festivals"`)
    pub async fn get_named_document(state: &AppState, name: &str) -> Result<Value, AppError> {
        let document = name.parse::<NamedDocument>().map_err(|_| {
            error!(document = name, "Unknown document requested");
            AppError::UnknownDocument(name.to_string())
        })?;
        Self::get_document(state, document).await
    }

    /// Load a document and return it untouched
    ///
    /// # Returns
    /// * `Ok(Value)` - The stored JSON
    /// * `Err(AppError::Document)` - The file is missing, unreadable, or not JSON
    pub async fn get_document(
        state: &AppState,
        document: NamedDocument,
    ) -> Result<Value, AppError> {
        let path = state.document_path(document);
        info!(document = %document, path = %path.display(), "Loading data");

        match state.store.load(&path).await {
            Ok(data) => {
                info!(document = %document, "Successfully retrieved document");
                Ok(data)
            }
            Err(e) => {
                error!(document = %document, error = %e, "Error retrieving document");
                Err(AppError::Document(e))
            }
        }
    }

    /// Placeholder itinerary generation: the request is logged and the stored
    /// itineraries are returned as-is.
    pub async fn generate_itinerary(
        state: &AppState,
        request: Option<Value>,
    ) -> Result<Value, AppError> {
        info!(request = ?request, "Generate itinerary request");
        Self::get_document(state, NamedDocument::Itineraries).await
    }

    /// Load the hotel listing
    pub async fn get_hotels(state: &AppState) -> Result<Value, AppError> {
        Self::get_document(state, NamedDocument::Hotels).await
    }

    /// Append `record` to the `bookings` array of the hotel-booking document
    ///
    /// # Returns
    /// * `Ok(Value)` - The submitted record
    /// * `Err(AppError::BookingTargetMissing)` - The document doesn't exist
    /// * `Err(AppError::BookingWrite)` - Anything else went wrong
    pub async fn add_booking(state: &AppState, record: Value) -> Result<Value, AppError> {
        let path = state.document_path(NamedDocument::Bookings);
        debug!(booking = %record, "Received booking data");

        match state
            .store
            .append_to_array(&path, BOOKINGS_FIELD, record.clone())
            .await
        {
            Ok(count) => {
                info!(
                    booking_id = ?record.get("id"),
                    total_bookings = count,
                    "Successfully added booking"
                );
                Ok(record)
            }
            Err(StoreError::NotFound(missing)) => {
                tracing::warn!(path = %missing.display(), "Hotels file not found");
                Err(AppError::BookingTargetMissing)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error updating booking data");
                Err(AppError::BookingWrite(e))
            }
        }
    }

    /// Recommendations are not implemented; the only outcome is
    /// `AppError::NotImplemented`
    pub fn ai_recommendations(request: Option<Value>) -> AppError {
        info!(request = ?request, "AI recommendations requested");
        AppError::NotImplemented
    }
}
