//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::state::NamedDocument;
use std::env;
use std::path::PathBuf;

/// Default port the mobile client expects
pub const DEFAULT_PORT: u16 = 6969;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Persistence configuration
    pub persistence: PersistenceConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Persistence configuration
#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    /// Directory holding the named JSON documents
    pub data_dir: PathBuf,
    /// Hotel listing document served by `GET /api/hotels`
    pub hotels_path: PathBuf,
    /// Hotel-booking document that `POST /api/bookings` appends to
    pub bookings_path: PathBuf,
}

impl PersistenceConfig {
    /// Build a persistence configuration rooted at `data_dir` with the
    /// default hotel and booking document locations.
    pub fn rooted_at(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            hotels_path: data_dir.join("hotel_data.json"),
            bookings_path: data_dir.join("hotels.json"),
            data_dir,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let data_dir = env::var_os("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        let mut persistence = PersistenceConfig::rooted_at(data_dir);
        if let Some(path) = env::var_os("HOTELS_PATH") {
            persistence.hotels_path = PathBuf::from(path);
        }
        if let Some(path) = env::var_os("BOOKINGS_PATH") {
            persistence.bookings_path = PathBuf::from(path);
        }

        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            persistence,
        }
    }

    /// Configuration for serving documents out of `data_dir` (used by tests
    /// and embedders that don't read the environment)
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                host: "127.0.0.1".to_string(),
            },
            persistence: PersistenceConfig::rooted_at(data_dir),
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Resolve the file backing a named document
    pub fn document_path(&self, document: NamedDocument) -> PathBuf {
        match document {
            NamedDocument::Hotels => self.persistence.hotels_path.clone(),
            NamedDocument::Bookings => self.persistence.bookings_path.clone(),
            other => self.persistence.data_dir.join(other.file_name()),
        }
    }
}
