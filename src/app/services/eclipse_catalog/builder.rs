//! Catalog construction from decoded records
//!
//! Records are folded in source order so "last write wins" on duplicate
//! catalog numbers is deterministic.

use super::Catalog;
use crate::app::services::catalog_parser::{CatalogParser, ParseResult};
use std::time::Duration;
use tracing::{debug, warn};

impl Catalog {
    /// Decode a catalog text and fold it into a catalog
    pub fn from_text(source_name: impl Into<String>, content: &str, parser: &CatalogParser) -> Self {
        Self::from_parse_result(source_name, parser.parse_text(content))
    }

    /// Fold decoded records into a catalog keyed by catalog number
    ///
    /// A later record replaces an earlier one with the same catalog number;
    /// each replacement is counted in `stats.duplicate_ids`.
    pub fn from_parse_result(source_name: impl Into<String>, result: ParseResult) -> Self {
        let mut catalog = Self::new(source_name);
        let ParseResult { records, mut stats } = result;

        for record in records {
            let id = record.eclipse.id;
            if let Some(previous) = catalog.eclipses.insert(id, record.eclipse) {
                stats.duplicate_ids += 1;
                warn!(
                    "Duplicate catalog number {} ({}), keeping later record",
                    id, previous.time
                );
            }
        }

        debug!(
            "Built catalog '{}' with {} eclipses ({} duplicates replaced)",
            catalog.source_name,
            catalog.eclipses.len(),
            stats.duplicate_ids
        );

        catalog.stats = stats;
        catalog
    }

    /// Record how long the load took
    pub(crate) fn with_load_duration(mut self, load_duration: Duration) -> Self {
        self.load_duration = load_duration;
        self
    }
}
