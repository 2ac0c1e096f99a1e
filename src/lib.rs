//! Eclipse Catalog Library
//!
//! A Rust library for decoding NASA's five-millennium solar eclipse catalog
//! from delimited text into a strongly-typed, queryable in-memory catalog.
//!
//! This library provides tools for:
//! - Splitting and tokenizing catalog records with single-layer quote stripping
//! - Decoding records into typed [`Eclipse`] values, separating structural
//!   failures (record skipped) from field fallbacks (default substituted)
//! - Storing the Besselian element polynomials needed for shadow geometry
//! - Folding decoded records into a [`Catalog`] keyed by catalog number
//! - One-shot asynchronous loading with an observable `Loading -> Ready` status

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_loader;
        pub mod catalog_parser;
        pub mod eclipse_catalog;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    BesselianElements, Eclipse, EclipseKind, EclipseType, GeoCoordinate, HybridSubtype, Ray3D,
};
pub use app::services::catalog_loader::{CatalogLoader, LoadFailure, LoadStatus};
pub use app::services::catalog_parser::RecordDecodeError;
pub use app::services::eclipse_catalog::Catalog;
pub use config::Config;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Load-level and application error types
///
/// Record-level decode failures are reported separately through
/// [`RecordDecodeError`]; they never abort a load.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog text could not be obtained or decoded as text
    #[error("Catalog resource '{source_name}' unavailable: {reason}")]
    ResourceUnavailable { source_name: String, reason: String },

    /// Load did not finish before the configured deadline
    #[error("Loading catalog '{source_name}' timed out after {seconds}s")]
    LoadTimeout { source_name: String, seconds: u64 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// No eclipse with the requested catalog number
    #[error("Eclipse not found: catalog number {id}")]
    EclipseNotFound { id: i32 },

    /// Eclipse type code did not resolve to a known type
    #[error("Invalid eclipse type code '{code}'")]
    InvalidEclipseType { code: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Output serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a resource unavailable error
    pub fn resource_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a load timeout error
    pub fn load_timeout(source_name: impl Into<String>, seconds: u64) -> Self {
        Self::LoadTimeout {
            source_name: source_name.into(),
            seconds,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an eclipse not found error
    pub fn eclipse_not_found(id: i32) -> Self {
        Self::EclipseNotFound { id }
    }

    /// Create an invalid eclipse type error
    pub fn invalid_eclipse_type(code: impl Into<String>) -> Self {
        Self::InvalidEclipseType { code: code.into() }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Check whether this error is a resource-level load failure
    pub fn is_resource_failure(&self) -> bool {
        matches!(
            self,
            Self::ResourceUnavailable { .. } | Self::LoadTimeout { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid configuration file: {}", error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}
