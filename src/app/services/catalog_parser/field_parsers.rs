//! Field parsing utilities for catalog records
//!
//! Two families of helpers: `required_*` fail the record with a
//! [`RecordDecodeError`], `fallback_*` substitute a default and record a
//! [`FieldFallback`] for diagnostics.

use super::record_decoder::{FieldFallback, RecordDecodeError};
use super::tokenizer::tokenize;
use chrono::NaiveDate;

/// Tokenized record with field accessors and fallback bookkeeping
#[derive(Debug)]
pub struct FieldReader<'a> {
    record: &'a str,
    tokens: Vec<&'a str>,
    fallbacks: Vec<FieldFallback>,
}

impl<'a> FieldReader<'a> {
    /// Tokenize a record for reading
    pub fn new(record: &'a str) -> Self {
        Self {
            record,
            tokens: tokenize(record),
            fallbacks: Vec::new(),
        }
    }

    /// Number of tokens in the record
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw record text
    pub fn record(&self) -> &'a str {
        self.record
    }

    /// Trimmed field value, `None` if the index is past the end
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied().map(str::trim)
    }

    /// Build a structural error for a field
    pub fn invalid(
        &self,
        index: usize,
        field: &'static str,
        reason: impl Into<String>,
    ) -> RecordDecodeError {
        RecordDecodeError::InvalidField {
            field_index: index,
            field,
            reason: reason.into(),
            record: self.record.to_string(),
        }
    }

    /// Get a required non-empty field value
    pub fn required(
        &self,
        index: usize,
        field: &'static str,
    ) -> Result<&'a str, RecordDecodeError> {
        match self.get(index) {
            None => Err(self.invalid(index, field, "field missing")),
            Some("") => Err(self.invalid(index, field, "empty value")),
            Some(value) => Ok(value),
        }
    }

    /// Parse a required i32 field
    pub fn required_i32(
        &self,
        index: usize,
        field: &'static str,
    ) -> Result<i32, RecordDecodeError> {
        let value = self.required(index, field)?;
        value.parse::<i32>().map_err(|e| {
            self.invalid(
                index,
                field,
                format!("invalid integer '{}' ({})", value, e),
            )
        })
    }

    /// Parse a required finite f64 field
    pub fn required_f64(
        &self,
        index: usize,
        field: &'static str,
    ) -> Result<f64, RecordDecodeError> {
        let value = self.required(index, field)?;
        parse_finite_f64(value)
            .ok_or_else(|| self.invalid(index, field, format!("invalid number '{}'", value)))
    }

    /// Parse an optional finite f64 field without recording a fallback
    pub fn optional_f64(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(parse_finite_f64)
    }

    /// Parse an i32 field, substituting `0` on failure
    pub fn fallback_i32(&mut self, index: usize, field: &'static str) -> i32 {
        match self.get(index).and_then(|s| s.parse::<i32>().ok()) {
            Some(value) => value,
            None => {
                self.note_fallback(index, field);
                0
            }
        }
    }

    /// Parse an f64 field, substituting `0.0` on failure
    pub fn fallback_f64(&mut self, index: usize, field: &'static str) -> f64 {
        match self.optional_f64(index) {
            Some(value) => value,
            None => {
                self.note_fallback(index, field);
                0.0
            }
        }
    }

    /// Parse `N` consecutive f64 fields starting at `start`
    ///
    /// Always yields a full-length array; missing or malformed elements are
    /// zero-filled individually.
    pub fn fallback_f64_array<const N: usize>(
        &mut self,
        start: usize,
        field: &'static str,
    ) -> [f64; N] {
        let mut values = [0.0; N];
        for (offset, value) in values.iter_mut().enumerate() {
            *value = self.fallback_f64(start + offset, field);
        }
        values
    }

    /// Record that a field was resolved with its default
    pub fn note_fallback(&mut self, index: usize, field: &'static str) {
        let raw = self.get(index).map(str::to_string);
        self.fallbacks.push(FieldFallback {
            field_index: index,
            field,
            raw,
        });
    }

    /// Consume the reader, returning the recorded fallbacks
    pub fn into_fallbacks(self) -> Vec<FieldFallback> {
        self.fallbacks
    }
}

/// Parse a float, rejecting NaN and infinities
pub fn parse_finite_f64(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

/// Resolve a catalog calendar date to a proleptic Gregorian date
///
/// The catalog uses the Julian calendar before 1582 October 15 and the
/// Gregorian calendar from then on. Years use astronomical numbering
/// (year 0 = 1 BCE). Returns `None` for dates that do not exist in the
/// applicable calendar.
pub fn catalog_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if (year, month, day) >= (1582, 10, 15) {
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if !(1..=12).contains(&month) || day == 0 || day > julian_days_in_month(year, month) {
        return None;
    }

    let julian_day_number = julian_calendar_day_number(year as i64, month as i64, day as i64);
    // 0001-01-01 (proleptic Gregorian) is JDN 1721426 and day 1 from CE
    let days_from_ce = julian_day_number - 1_721_425;
    i32::try_from(days_from_ce)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

fn julian_days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if year.rem_euclid(4) == 0 => 29,
        2 => 28,
        _ => 31,
    }
}

fn julian_calendar_day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - 32083
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_finite_f64() {
        assert_eq!(parse_finite_f64(" 1.5 "), Some(1.5));
        assert_eq!(parse_finite_f64("-0.0046"), Some(-0.0046));
        assert_eq!(parse_finite_f64("NaN"), None);
        assert_eq!(parse_finite_f64("inf"), None);
        assert_eq!(parse_finite_f64("garbage"), None);
        assert_eq!(parse_finite_f64(""), None);
    }

    #[test]
    fn test_gregorian_dates_pass_through() {
        assert_eq!(
            catalog_date(2024, 4, 8),
            NaiveDate::from_ymd_opt(2024, 4, 8)
        );
        assert_eq!(
            catalog_date(1582, 10, 15),
            NaiveDate::from_ymd_opt(1582, 10, 15)
        );
        assert_eq!(catalog_date(2023, 2, 29), None);
    }

    #[test]
    fn test_julian_dates_converted() {
        // Last Julian day is followed by the first Gregorian day
        assert_eq!(
            catalog_date(1582, 10, 4),
            NaiveDate::from_ymd_opt(1582, 10, 14)
        );
        assert_eq!(
            catalog_date(1000, 1, 1),
            NaiveDate::from_ymd_opt(1000, 1, 6)
        );
        // Julian leap day that does not exist in the Gregorian calendar
        assert_eq!(
            catalog_date(1500, 2, 29),
            NaiveDate::from_ymd_opt(1500, 3, 10)
        );
    }

    #[test]
    fn test_julian_dates_before_common_era() {
        // Astronomical year 0 is a Julian leap year
        assert!(catalog_date(0, 2, 29).is_some());
        assert!(catalog_date(-1, 2, 29).is_none());
        assert!(catalog_date(-1999, 6, 10).is_some());
    }

    #[test]
    fn test_invalid_calendar_fields() {
        assert_eq!(catalog_date(1200, 13, 1), None);
        assert_eq!(catalog_date(1200, 4, 31), None);
        assert_eq!(catalog_date(1200, 4, 0), None);
    }

    #[test]
    fn test_fallback_array_pads_short_records() {
        let mut reader = FieldReader::new("1.0,2.0");
        let values: [f64; 4] = reader.fallback_f64_array(0, "x");
        assert_eq!(values, [1.0, 2.0, 0.0, 0.0]);

        let fallbacks = reader.into_fallbacks();
        assert_eq!(fallbacks.len(), 2);
        assert_eq!(fallbacks[0].field_index, 2);
        assert_eq!(fallbacks[0].raw, None);
    }

    #[test]
    fn test_required_empty_field() {
        let reader = FieldReader::new("a,,c");
        assert_eq!(reader.required(0, "first").unwrap(), "a");

        let err = reader.required(1, "second").unwrap_err();
        assert_eq!(err.field_index(), Some(1));
        assert!(reader.required(5, "missing").is_err());
    }
}
