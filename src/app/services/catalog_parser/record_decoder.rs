//! Individual catalog record decoding
//!
//! Maps the token sequence of one record to a typed [`Eclipse`]. The eclipse
//! type is resolved before any type-dependent field is read.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use tracing::trace;

use super::field_parsers::{FieldReader, catalog_date};
use crate::app::models::{BesselianElements, Eclipse, EclipseType, GeoCoordinate, Ray3D};
use crate::constants::{FULL_RECORD_FIELDS, MIN_RECORD_FIELDS, columns};

/// Structural failure decoding one record
///
/// The record is skipped; the load continues.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecordDecodeError {
    /// Fewer fields than the decoder needs
    #[error("Malformed record: expected at least {expected} fields, found {found}")]
    TooFewFields {
        expected: usize,
        found: usize,
        record: String,
    },

    /// A structurally required field could not be decoded
    #[error("Invalid {field} in field {field_index}: {reason}")]
    InvalidField {
        field_index: usize,
        field: &'static str,
        reason: String,
        record: String,
    },

    /// Decoded fields violate an eclipse invariant
    #[error("Inconsistent record: {reason}")]
    Inconsistent { reason: String, record: String },
}

impl RecordDecodeError {
    /// Index of the offending field, if a single field is to blame
    pub fn field_index(&self) -> Option<usize> {
        match self {
            Self::InvalidField { field_index, .. } => Some(*field_index),
            Self::TooFewFields { .. } | Self::Inconsistent { .. } => None,
        }
    }

    /// Raw text of the rejected record
    pub fn record(&self) -> &str {
        match self {
            Self::TooFewFields { record, .. }
            | Self::InvalidField { record, .. }
            | Self::Inconsistent { record, .. } => record,
        }
    }
}

/// A non-structural field resolved with its default value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFallback {
    pub field_index: usize,
    pub field: &'static str,

    /// Raw token, `None` when the record was too short
    pub raw: Option<String>,
}

/// Successfully decoded record with the fallbacks applied to it
#[derive(Debug, Clone)]
pub struct DecodedRecord {
    pub eclipse: Eclipse,
    pub fallbacks: Vec<FieldFallback>,
}

/// Decode a single catalog record
pub fn decode_record(record: &str) -> Result<DecodedRecord, RecordDecodeError> {
    let mut reader = FieldReader::new(record);

    if reader.len() < MIN_RECORD_FIELDS {
        return Err(RecordDecodeError::TooFewFields {
            expected: MIN_RECORD_FIELDS,
            found: reader.len(),
            record: record.to_string(),
        });
    }

    let time = apply_delta_t(assemble_time(&reader)?, &mut reader);

    let luna = reader.fallback_i32(columns::LUNA_NUMBER, "luna number");
    let saros = reader.fallback_i32(columns::SAROS_NUMBER, "saros number");

    let type_code = reader.required(columns::ECLIPSE_TYPE, "eclipse type")?;
    let eclipse_type = EclipseType::from_code(type_code)
        .map_err(|e| reader.invalid(columns::ECLIPSE_TYPE, "eclipse type", e.to_string()))?;

    let gamma = reader.fallback_f64(columns::GAMMA, "gamma");
    let magnitude = reader.fallback_f64(columns::MAGNITUDE, "magnitude");

    let location = decode_location(&reader)?;

    // Partial eclipses have no central line; whatever the tokens hold is ignored
    let (sun_altitude, path_width_km, duration_secs) = if eclipse_type.has_central_path() {
        (
            Some(reader.fallback_f64(columns::SUN_ALTITUDE, "sun altitude")),
            Some(reader.fallback_f64(columns::PATH_WIDTH, "path width")),
            Some(reader.fallback_f64(columns::CENTRAL_DURATION, "central duration")),
        )
    } else {
        (None, None, None)
    };

    let sun_azimuth = reader.fallback_f64(columns::SUN_AZIMUTH, "sun azimuth");

    let id = reader.required_i32(columns::CATALOG_NUMBER, "catalog number")?;
    if id < 1 {
        return Err(reader.invalid(
            columns::CATALOG_NUMBER,
            "catalog number",
            format!("{} is not a positive catalog number", id),
        ));
    }

    let besselian = decode_besselian_elements(&mut reader);

    let eclipse = Eclipse {
        id,
        time,
        luna,
        saros,
        eclipse_type,
        gamma,
        magnitude,
        location,
        sun_position: Ray3D {
            azimuth: sun_azimuth,
            altitude: sun_altitude,
        },
        path_width_km,
        duration_secs,
        besselian,
    };

    eclipse
        .validate()
        .map_err(|e| RecordDecodeError::Inconsistent {
            reason: e.to_string(),
            record: record.to_string(),
        })?;

    if reader.len() < FULL_RECORD_FIELDS {
        trace!(
            "Eclipse {} has {} of {} fields, missing coefficients zero-filled",
            id,
            reader.len(),
            FULL_RECORD_FIELDS
        );
    }

    let fallbacks = reader.into_fallbacks();
    if !fallbacks.is_empty() {
        trace!(
            "Eclipse {} decoded with {} field fallbacks",
            id,
            fallbacks.len()
        );
    }

    Ok(DecodedRecord { eclipse, fallbacks })
}

/// Combine year, month, day and time of greatest eclipse into a UTC instant
fn assemble_time(reader: &FieldReader<'_>) -> Result<DateTime<Utc>, RecordDecodeError> {
    let year = reader.required_i32(columns::YEAR, "year")?;

    let month_str = reader.required(columns::MONTH, "month")?;
    let month = month_str.parse::<u32>().map_err(|_| {
        reader.invalid(
            columns::MONTH,
            "month",
            format!("invalid month '{}'", month_str),
        )
    })?;

    let day_str = reader.required(columns::DAY, "day")?;
    let day = day_str.parse::<u32>().map_err(|_| {
        reader.invalid(columns::DAY, "day", format!("invalid day '{}'", day_str))
    })?;

    let date = catalog_date(year, month, day).ok_or_else(|| {
        reader.invalid(
            columns::DAY,
            "day",
            format!("no such date {}-{:02}-{:02}", year, month, day),
        )
    })?;

    let time_str = reader.required(columns::TIME_OF_GREATEST_ECLIPSE, "time of greatest eclipse")?;
    let time_of_day = NaiveTime::parse_from_str(time_str, "%H:%M:%S").map_err(|e| {
        reader.invalid(
            columns::TIME_OF_GREATEST_ECLIPSE,
            "time of greatest eclipse",
            format!("invalid time '{}' ({})", time_str, e),
        )
    })?;

    Ok(date.and_time(time_of_day).and_utc())
}

/// Add Delta T (seconds) when it parses; otherwise keep the time uncorrected
fn apply_delta_t(time: DateTime<Utc>, reader: &mut FieldReader<'_>) -> DateTime<Utc> {
    let corrected = reader.optional_f64(columns::DELTA_T).and_then(|delta_t| {
        let micros = (delta_t * 1_000_000.0).round() as i64;
        time.checked_add_signed(Duration::microseconds(micros))
    });

    match corrected {
        Some(corrected) => corrected,
        None => {
            reader.note_fallback(columns::DELTA_T, "delta t");
            time
        }
    }
}

/// Decimal latitude/longitude of greatest eclipse
fn decode_location(reader: &FieldReader<'_>) -> Result<GeoCoordinate, RecordDecodeError> {
    let latitude = reader.required_f64(columns::LATITUDE, "latitude")?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(reader.invalid(
            columns::LATITUDE,
            "latitude",
            format!("{} out of range", latitude),
        ));
    }

    let longitude = reader.required_f64(columns::LONGITUDE, "longitude")?;
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(reader.invalid(
            columns::LONGITUDE,
            "longitude",
            format!("{} out of range", longitude),
        ));
    }

    Ok(GeoCoordinate::new(latitude, longitude))
}

fn decode_besselian_elements(reader: &mut FieldReader<'_>) -> BesselianElements {
    BesselianElements {
        t0: reader.fallback_f64(columns::T0, "t0"),
        x_coefficients: reader.fallback_f64_array(columns::X, "x"),
        y_coefficients: reader.fallback_f64_array(columns::Y, "y"),
        axis_declination_coefficients: reader.fallback_f64_array(columns::AXIS_DECLINATION, "d"),
        axis_hour_angle_coefficients: reader.fallback_f64_array(columns::AXIS_HOUR_ANGLE, "mu"),
        penumbral_radius_coefficients: reader.fallback_f64_array(columns::PENUMBRAL_RADIUS, "l1"),
        umbral_radius_coefficients: reader.fallback_f64_array(columns::UMBRAL_RADIUS, "l2"),
        tan_penumbral_axis_angle: reader
            .fallback_f64(columns::TAN_PENUMBRAL_AXIS_ANGLE, "tan f1"),
        tan_umbral_axis_angle: reader.fallback_f64(columns::TAN_UMBRAL_AXIS_ANGLE, "tan f2"),
    }
}
