//! Data models for the eclipse catalog
//!
//! This module contains the core data structures for representing a single
//! solar eclipse from NASA's five-millennium catalog, including the Besselian
//! elements needed downstream for shadow geometry.
//!
//! Reference: <https://eclipse.gsfc.nasa.gov/SEcat5/SEcatkey.html>

use crate::constants::ECLIPSES_PER_CANON_PLATE;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Eclipse Type
// =============================================================================

/// How a hybrid eclipse changes character along its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HybridSubtype {
    /// Path begins total and ends annular (`H2`)
    StartTotal,
    /// Path begins annular and ends total (`H3`)
    EndTotal,
    /// Path begins and ends annular, total in the middle
    StartEndAnnular,
}

impl HybridSubtype {
    /// Resolve the subtype from the second character of a hybrid type code
    pub fn from_marker(marker: char) -> Self {
        match marker {
            '2' => HybridSubtype::StartTotal,
            '3' => HybridSubtype::EndTotal,
            _ => HybridSubtype::StartEndAnnular,
        }
    }

    /// Canonical second character of the type code
    pub fn marker(&self) -> char {
        match self {
            HybridSubtype::StartTotal => '2',
            HybridSubtype::EndTotal => '3',
            HybridSubtype::StartEndAnnular => 'm',
        }
    }
}

/// Eclipse classification as published in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EclipseType {
    Total,
    Annular,
    Partial,
    Hybrid(HybridSubtype),
}

impl EclipseType {
    /// Decode a catalog type code such as `"Tm"`, `"A+"`, `"Pb"` or `"H2"`
    ///
    /// Only the first character selects the type; for hybrids the second
    /// character selects the subtype and must be present.
    pub fn from_code(code: &str) -> Result<Self> {
        let mut chars = code.trim().chars();
        match chars.next() {
            Some('T') => Ok(EclipseType::Total),
            Some('A') => Ok(EclipseType::Annular),
            Some('P') => Ok(EclipseType::Partial),
            Some('H') => chars
                .next()
                .map(|marker| EclipseType::Hybrid(HybridSubtype::from_marker(marker)))
                .ok_or_else(|| Error::invalid_eclipse_type(code)),
            _ => Err(Error::invalid_eclipse_type(code)),
        }
    }

    /// Canonical type code
    pub fn code(&self) -> String {
        match self {
            EclipseType::Total => "T".to_string(),
            EclipseType::Annular => "A".to_string(),
            EclipseType::Partial => "P".to_string(),
            EclipseType::Hybrid(subtype) => format!("H{}", subtype.marker()),
        }
    }

    /// Whether the umbral or antumbral shadow touches Earth
    ///
    /// Central eclipses carry sun altitude, path width and duration.
    pub fn has_central_path(&self) -> bool {
        match self {
            EclipseType::Total | EclipseType::Annular | EclipseType::Hybrid(_) => true,
            EclipseType::Partial => false,
        }
    }

    /// Type without the hybrid subtype
    pub fn kind(&self) -> EclipseKind {
        match self {
            EclipseType::Total => EclipseKind::Total,
            EclipseType::Annular => EclipseKind::Annular,
            EclipseType::Partial => EclipseKind::Partial,
            EclipseType::Hybrid(_) => EclipseKind::Hybrid,
        }
    }
}

impl FromStr for EclipseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for EclipseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Coarse eclipse category used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EclipseKind {
    Total,
    Annular,
    Partial,
    Hybrid,
}

impl EclipseKind {
    /// All kinds in display order
    pub fn all_values() -> Vec<EclipseKind> {
        vec![
            EclipseKind::Total,
            EclipseKind::Annular,
            EclipseKind::Hybrid,
            EclipseKind::Partial,
        ]
    }
}

impl FromStr for EclipseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t" | "total" => Ok(EclipseKind::Total),
            "a" | "annular" => Ok(EclipseKind::Annular),
            "p" | "partial" => Ok(EclipseKind::Partial),
            "h" | "hybrid" => Ok(EclipseKind::Hybrid),
            _ => Err(Error::invalid_eclipse_type(s)),
        }
    }
}

impl fmt::Display for EclipseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EclipseKind::Total => "total",
            EclipseKind::Annular => "annular",
            EclipseKind::Partial => "partial",
            EclipseKind::Hybrid => "hybrid",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both components are finite and within WGS84 ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Sun position at greatest eclipse, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray3D {
    pub azimuth: f64,

    /// Absent for partial eclipses
    pub altitude: Option<f64>,
}

/// Besselian elements: polynomials in `t - t0` (hours) describing the shadow cone
///
/// Axis means the shadow cone axis; f1 and f2 are measured with respect to
/// the lunar shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BesselianElements {
    /// Reference time of the polynomials (TD hours)
    pub t0: f64,

    pub x_coefficients: [f64; 4],
    pub y_coefficients: [f64; 4],

    /// d
    pub axis_declination_coefficients: [f64; 3],

    /// µ
    pub axis_hour_angle_coefficients: [f64; 3],

    /// L1
    pub penumbral_radius_coefficients: [f64; 3],

    /// L2
    pub umbral_radius_coefficients: [f64; 3],

    /// tan(f1)
    pub tan_penumbral_axis_angle: f64,

    /// tan(f2)
    pub tan_umbral_axis_angle: f64,
}

// =============================================================================
// Eclipse Record
// =============================================================================

/// One solar eclipse from the catalog
///
/// Created only by the record decoder and never mutated afterwards; the
/// catalog hands out shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eclipse {
    /// Catalog number, unique within a catalog
    pub id: i32,

    /// Greatest eclipse: catalog time plus Delta T
    pub time: DateTime<Utc>,

    /// Lunation number
    pub luna: i32,

    /// Saros series
    pub saros: i32,

    pub eclipse_type: EclipseType,

    /// Minimum distance of the shadow axis from Earth's centre, in Earth radii
    pub gamma: f64,

    pub magnitude: f64,

    /// Location of greatest eclipse
    pub location: GeoCoordinate,

    pub sun_position: Ray3D,

    /// Kilometers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_width_km: Option<f64>,

    /// Central duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,

    pub besselian: BesselianElements,
}

impl Eclipse {
    /// Plate number in the NASA eclipse canon
    ///
    /// Can be used to retrieve the printed diagram of the eclipse.
    pub fn canon_plate_number(&self) -> i32 {
        (self.id.saturating_sub(1) / ECLIPSES_PER_CANON_PLATE) + 1
    }

    /// Whether sun altitude, path width and duration are defined
    pub fn has_central_path(&self) -> bool {
        self.eclipse_type.has_central_path()
    }

    pub fn kind(&self) -> EclipseKind {
        self.eclipse_type.kind()
    }

    /// Validate the type-dependent field presence and coordinate ranges
    pub fn validate(&self) -> Result<()> {
        if self.id < 1 {
            return Err(Error::data_validation(format!(
                "Catalog number must be positive, got {}",
                self.id
            )));
        }

        let conditional = [
            ("sun altitude", self.sun_position.altitude.is_some()),
            ("path width", self.path_width_km.is_some()),
            ("duration", self.duration_secs.is_some()),
        ];

        let central = self.has_central_path();
        for (name, present) in conditional {
            if present != central {
                return Err(Error::data_validation(format!(
                    "Eclipse {}: {} must be {} for type {}",
                    self.id,
                    name,
                    if central { "present" } else { "absent" },
                    self.eclipse_type
                )));
            }
        }

        if !self.location.is_valid() {
            return Err(Error::data_validation(format!(
                "Eclipse {}: invalid location {}, {}",
                self.id, self.location.latitude, self.location.longitude
            )));
        }

        Ok(())
    }
}
