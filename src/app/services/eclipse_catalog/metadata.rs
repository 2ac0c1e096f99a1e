//! Catalog metadata
//!
//! Summary information about a loaded catalog for reporting.

use super::Catalog;
use crate::app::services::catalog_parser::DecodeStats;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Metadata about a loaded catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogMetadata {
    /// Name of the catalog source
    pub source_name: String,

    /// Number of eclipses in the catalog
    pub eclipse_count: usize,

    /// Earliest eclipse time, if any
    pub earliest: Option<DateTime<Utc>>,

    /// Latest eclipse time, if any
    pub latest: Option<DateTime<Utc>>,

    /// Time taken to load the catalog
    pub load_duration: Duration,

    /// Decode statistics
    pub stats: DecodeStats,
}

impl CatalogMetadata {
    /// Get a summary string of the catalog
    pub fn summary(&self) -> String {
        let span = match (self.earliest, self.latest) {
            (Some(earliest), Some(latest)) => format!(
                " spanning {} to {}",
                earliest.format("%Y-%m-%d"),
                latest.format("%Y-%m-%d")
            ),
            _ => String::new(),
        };

        format!(
            "Catalog '{}': {} eclipses{} loaded in {:.2}s",
            self.source_name,
            self.eclipse_count,
            span,
            self.load_duration.as_secs_f64()
        )
    }
}

impl Catalog {
    /// Get catalog metadata
    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata {
            source_name: self.source_name.clone(),
            eclipse_count: self.eclipses.len(),
            earliest: self.eclipses.values().map(|e| e.time).min(),
            latest: self.eclipses.values().map(|e| e.time).max(),
            load_duration: self.load_duration,
            stats: self.stats.clone(),
        }
    }
}
