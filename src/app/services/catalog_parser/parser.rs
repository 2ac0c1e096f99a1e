//! Catalog text parser
//!
//! Drives the splitter, tokenizer and decoder over a whole catalog text.
//! Records are decoded sequentially so source order is preserved.

use tracing::{debug, info, warn};

use super::line_splitter::split_records;
use super::record_decoder::decode_record;
use super::stats::{DecodeStats, ParseResult};
use crate::constants::DEFAULT_MAX_REPORTED_ERRORS;

/// Parser for NASA eclipse catalog text
///
/// Structural record failures are logged and counted; they never stop the
/// pass over the remaining records.
#[derive(Debug, Clone)]
pub struct CatalogParser {
    max_reported_errors: usize,
}

impl CatalogParser {
    /// Create a parser with the default error reporting cap
    pub fn new() -> Self {
        Self {
            max_reported_errors: DEFAULT_MAX_REPORTED_ERRORS,
        }
    }

    /// Limit how many decode error messages are retained in statistics
    pub fn with_max_reported_errors(mut self, limit: usize) -> Self {
        self.max_reported_errors = limit;
        self
    }

    /// Decode every data record of a catalog text
    pub fn parse_text(&self, content: &str) -> ParseResult {
        let mut stats = DecodeStats::with_error_limit(self.max_reported_errors);
        let mut records = Vec::new();

        for raw in split_records(content) {
            stats.total_records += 1;

            match decode_record(raw.text) {
                Ok(decoded) => {
                    for fallback in &decoded.fallbacks {
                        debug!(
                            "Line {}: {} (field {}) fell back to default, raw value {:?}",
                            raw.line_number, fallback.field, fallback.field_index, fallback.raw
                        );
                    }
                    stats.record_fallbacks(&decoded.fallbacks);
                    stats.records_decoded += 1;
                    records.push(decoded);
                }
                Err(e) => {
                    stats.records_skipped += 1;
                    warn!("Skipped line {}: {}", raw.line_number, e);
                    debug!("Rejected record text: {}", e.record());
                    stats.record_error(format!("Line {}: {}", raw.line_number, e));
                }
            }
        }

        info!(
            "Decoded {} of {} catalog records ({} skipped, {} field fallbacks)",
            stats.records_decoded, stats.total_records, stats.records_skipped, stats.field_fallbacks
        );

        ParseResult { records, stats }
    }
}

impl Default for CatalogParser {
    fn default() -> Self {
        Self::new()
    }
}
