//! Field tokenization for catalog records
//!
//! Quoting only protects a handful of compound fields and never nests, and no
//! quoted field that matters contains the delimiter. The tokenizer therefore
//! splits on every delimiter and strips at most one outer quote pair per
//! token. It never fails; too-short records are rejected by the decoder.

use crate::constants::{FIELD_DELIMITER, QUOTE_CHAR};

/// Split a record into raw field strings
///
/// Always yields `delimiter count + 1` tokens.
pub fn tokenize(record: &str) -> Vec<&str> {
    record.split(FIELD_DELIMITER).map(strip_quotes).collect()
}

/// Strip exactly one surrounding quote pair, if present
///
/// Interior content, including further quote characters, is left untouched.
/// Unquoted tokens are returned unchanged.
pub fn strip_quotes(token: &str) -> &str {
    token
        .trim()
        .strip_prefix(QUOTE_CHAR)
        .and_then(|inner| inner.strip_suffix(QUOTE_CHAR))
        .unwrap_or(token)
}
