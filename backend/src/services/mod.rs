//! Service layer
//!
//! Business logic shared by the HTTP handlers.

pub mod data;

pub use data::{DataService, HealthInfo};
