//! Decode statistics and result structures for catalog parsing
//!
//! This module provides types for tracking decode success rates and field
//! fallbacks, and for carrying decoded records to the catalog builder.

use super::record_decoder::{DecodedRecord, FieldFallback};
use crate::constants::{DEFAULT_MAX_REPORTED_ERRORS, HEALTHY_DECODE_RATE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parse result with decoded records in source order
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully decoded records, in the order they appear in the source
    pub records: Vec<DecodedRecord>,

    /// Decode statistics
    pub stats: DecodeStats,
}

/// Decode statistics for one pass over the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeStats {
    /// Data records encountered (header and blank lines excluded)
    pub total_records: usize,

    /// Records decoded into an eclipse
    pub records_decoded: usize,

    /// Records skipped due to structural errors
    pub records_skipped: usize,

    /// Decoded records that replaced an earlier record with the same catalog number
    pub duplicate_ids: usize,

    /// Total non-structural fields resolved with a default
    pub field_fallbacks: usize,

    /// Fallback counts per field name
    pub fallbacks_by_field: BTreeMap<String, usize>,

    /// Decode error messages, capped at `max_reported_errors`
    pub errors: Vec<String>,

    /// Maximum number of error messages kept in `errors`
    pub max_reported_errors: usize,
}

impl DecodeStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::with_error_limit(DEFAULT_MAX_REPORTED_ERRORS)
    }

    /// Create new empty statistics retaining at most `limit` error messages
    pub fn with_error_limit(limit: usize) -> Self {
        Self {
            total_records: 0,
            records_decoded: 0,
            records_skipped: 0,
            duplicate_ids: 0,
            field_fallbacks: 0,
            fallbacks_by_field: BTreeMap::new(),
            errors: Vec::new(),
            max_reported_errors: limit,
        }
    }

    /// Count the fallbacks applied to one decoded record
    pub fn record_fallbacks(&mut self, fallbacks: &[FieldFallback]) {
        self.field_fallbacks += fallbacks.len();
        for fallback in fallbacks {
            *self
                .fallbacks_by_field
                .entry(fallback.field.to_string())
                .or_insert(0) += 1;
        }
    }

    /// Keep an error message if the cap has not been reached
    pub fn record_error(&mut self, message: String) {
        if self.errors.len() < self.max_reported_errors {
            self.errors.push(message);
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_decoded as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if decoding was mostly successful
    pub fn is_successful(&self) -> bool {
        self.success_rate() > HEALTHY_DECODE_RATE
    }

    /// Get a summary string of the decode pass
    pub fn summary(&self) -> String {
        format!(
            "Decoded {} of {} records ({:.1}%), {} skipped, {} duplicate ids, {} field fallbacks",
            self.records_decoded,
            self.total_records,
            self.success_rate(),
            self.records_skipped,
            self.duplicate_ids,
            self.field_fallbacks
        )
    }
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self::new()
    }
}
