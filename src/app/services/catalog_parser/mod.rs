//! Decoder for the NASA solar eclipse catalog text format
//!
//! The catalog is comma-delimited text with a conditional schema: which
//! fields are meaningful depends on the eclipse type. Decoding is split into
//! small stages so each can be tested in isolation.
//!
//! ## Architecture
//!
//! - [`line_splitter`] - Record boundaries, header and blank line removal
//! - [`tokenizer`] - Field splitting with single-layer quote stripping
//! - [`field_parsers`] - Structural and fallback field conversions
//! - [`record_decoder`] - Token sequence to typed [`Eclipse`](crate::Eclipse)
//! - [`parser`] - Orchestration over a whole catalog text
//! - [`stats`] - Decode statistics and result structures
//!
//! ## Failure policy
//!
//! Structural fields (date, type code, location, catalog number) fail the
//! record with a [`RecordDecodeError`]; the record is skipped and decoding
//! continues. Every other numeric field falls back to a documented default and
//! is reported as a [`FieldFallback`].
//!
//! ## Usage
//!
//! ```rust
//! use eclipse_catalog::app::services::catalog_parser::CatalogParser;
//!
//! let text = "header\n2024,4,8,\"18:17:16\",74,292,139,\"T\"";
//! let result = CatalogParser::new().parse_text(text);
//!
//! // The single record is too short to decode
//! assert_eq!(result.stats.total_records, 1);
//! assert_eq!(result.stats.records_skipped, 1);
//! ```

pub mod field_parsers;
pub mod line_splitter;
pub mod parser;
pub mod record_decoder;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_splitter::{RawRecord, split_records};
pub use parser::CatalogParser;
pub use record_decoder::{DecodedRecord, FieldFallback, RecordDecodeError, decode_record};
pub use stats::{DecodeStats, ParseResult};
pub use tokenizer::tokenize;
