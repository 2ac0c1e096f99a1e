//! In-memory eclipse catalog with O(1) lookup by catalog number
//!
//! A [`Catalog`] is built once from decoded records and is read-only
//! afterwards; the loader shares it behind an `Arc`.

use crate::app::models::Eclipse;
use crate::app::services::catalog_parser::DecodeStats;
use crate::{Error, Result};
use std::collections::HashMap;
use std::time::Duration;

pub mod builder;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::CatalogMetadata;
pub use query::{CatalogStatistics, GeographicRegion, SearchCriteria, TimeRange};

/// Eclipses indexed by catalog number
///
/// Keys are unique by construction; when the source repeats a catalog
/// number the later record wins.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Eclipses indexed by catalog number
    pub(crate) eclipses: HashMap<i32, Eclipse>,

    /// Name of the source the catalog was decoded from
    pub(crate) source_name: String,

    /// Statistics of the decode pass that produced this catalog
    pub(crate) stats: DecodeStats,

    /// Time taken to fetch and decode the source
    pub(crate) load_duration: Duration,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            eclipses: HashMap::new(),
            source_name: source_name.into(),
            stats: DecodeStats::new(),
            load_duration: Duration::ZERO,
        }
    }

    /// Get an eclipse by catalog number (O(1) lookup)
    pub fn by_id(&self, id: i32) -> Option<&Eclipse> {
        self.eclipses.get(&id)
    }

    /// Get an eclipse by catalog number or fail with `EclipseNotFound`
    pub fn require(&self, id: i32) -> Result<&Eclipse> {
        self.by_id(id).ok_or_else(|| Error::eclipse_not_found(id))
    }

    /// Check if a catalog number is present
    pub fn contains(&self, id: i32) -> bool {
        self.eclipses.contains_key(&id)
    }

    /// Number of eclipses in the catalog
    pub fn len(&self) -> usize {
        self.eclipses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eclipses.is_empty()
    }

    /// Iterate over eclipses in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Eclipse> {
        self.eclipses.values()
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Decode statistics for the pass that built this catalog
    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    pub fn load_duration(&self) -> Duration {
        self.load_duration
    }
}
