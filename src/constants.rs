//! Application constants for the eclipse catalog
//!
//! This module contains the catalog column layout, decoder thresholds,
//! default values and environment variable names used throughout the crate.

// =============================================================================
// Catalog Text Format
// =============================================================================

/// Field delimiter used by the catalog text
pub const FIELD_DELIMITER: char = ',';

/// Quote character protecting compound fields (dates, type codes, display coordinates)
pub const QUOTE_CHAR: char = '"';

/// Minimum number of fields a record must carry to be decoded
///
/// Every structural field sits below this index. Records shorter than the full
/// layout but above this threshold decode with zero-filled Besselian elements.
pub const MIN_RECORD_FIELDS: usize = 40;

/// Number of fields in a complete catalog record
pub const FULL_RECORD_FIELDS: usize = 45;

/// Column indices (0-based) of the fields consumed by the decoder
///
/// Columns 10-11, 17 and 20-21 hold display representations (sexagesimal
/// coordinates, formatted duration, canon plate, Julian date) and are skipped.
pub mod columns {
    pub const YEAR: usize = 0;
    pub const MONTH: usize = 1;
    pub const DAY: usize = 2;
    pub const TIME_OF_GREATEST_ECLIPSE: usize = 3;
    pub const DELTA_T: usize = 4;
    pub const LUNA_NUMBER: usize = 5;
    pub const SAROS_NUMBER: usize = 6;
    pub const ECLIPSE_TYPE: usize = 7;
    pub const GAMMA: usize = 8;
    pub const MAGNITUDE: usize = 9;
    pub const LATITUDE: usize = 12;
    pub const LONGITUDE: usize = 13;
    pub const SUN_ALTITUDE: usize = 14;
    pub const SUN_AZIMUTH: usize = 15;
    pub const PATH_WIDTH: usize = 16;
    pub const CENTRAL_DURATION: usize = 18;
    pub const CATALOG_NUMBER: usize = 19;
    pub const T0: usize = 22;
    pub const X: usize = 23;
    pub const Y: usize = 27;
    pub const AXIS_DECLINATION: usize = 31;
    pub const AXIS_HOUR_ANGLE: usize = 34;
    pub const PENUMBRAL_RADIUS: usize = 37;
    pub const UMBRAL_RADIUS: usize = 40;
    pub const TAN_PENUMBRAL_AXIS_ANGLE: usize = 43;
    pub const TAN_UMBRAL_AXIS_ANGLE: usize = 44;
}

/// Number of eclipses printed on each plate of the NASA eclipse canon
pub const ECLIPSES_PER_CANON_PLATE: i32 = 20;

// =============================================================================
// Defaults
// =============================================================================

/// Default catalog asset name
pub const DEFAULT_CATALOG_FILE: &str = "filtered-eclipses.csv";

/// Default load deadline in seconds
pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 30;

/// Default cap on decode error messages retained in statistics
pub const DEFAULT_MAX_REPORTED_ERRORS: usize = 100;

/// Default log level when neither `RUST_LOG` nor CLI flags are given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Success rate (percent) above which a decode pass is considered healthy
pub const HEALTHY_DECODE_RATE: f64 = 90.0;

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "eclipse-catalog";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the catalog path
pub const ENV_CATALOG_PATH: &str = "ECLIPSE_CATALOG_PATH";

/// Environment variable overriding the load timeout (seconds, 0 disables)
pub const ENV_TIMEOUT_SECS: &str = "ECLIPSE_CATALOG_TIMEOUT_SECS";
