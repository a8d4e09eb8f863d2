// State management module
// Handles shared application context, the document catalogue, and persistence

pub mod app_state;
pub mod documents;
pub mod persistence;

pub use app_state::AppState;
pub use documents::NamedDocument;
pub use persistence::{DocumentStore, StoreError};
