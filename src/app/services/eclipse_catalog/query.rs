//! Eclipse lookup and search functionality
//!
//! Read-only queries over a loaded catalog: chronological listing, Saros
//! series, eclipse kind, time windows, canon plates and geographic regions.

use super::Catalog;
use crate::app::models::{Eclipse, EclipseKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

impl Catalog {
    /// Get all catalog numbers in ascending order
    pub fn ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.eclipses.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Get all eclipses in chronological order
    ///
    /// Ties on time are broken by catalog number so the order is stable.
    pub fn all(&self) -> Vec<&Eclipse> {
        sorted_chronologically(self.eclipses.values().collect())
    }

    /// Find all eclipses of a Saros series, in chronological order
    pub fn by_saros(&self, saros: i32) -> Vec<&Eclipse> {
        sorted_chronologically(
            self.eclipses
                .values()
                .filter(|eclipse| eclipse.saros == saros)
                .collect(),
        )
    }

    /// Find all eclipses of a kind, in chronological order
    pub fn by_kind(&self, kind: EclipseKind) -> Vec<&Eclipse> {
        sorted_chronologically(
            self.eclipses
                .values()
                .filter(|eclipse| eclipse.kind() == kind)
                .collect(),
        )
    }

    /// Find eclipses whose greatest eclipse falls within `[start, end]`
    pub fn between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Eclipse> {
        sorted_chronologically(
            self.eclipses
                .values()
                .filter(|eclipse| eclipse.time >= start && eclipse.time <= end)
                .collect(),
        )
    }

    /// Find the eclipses printed on one canon plate
    pub fn by_canon_plate(&self, plate: i32) -> Vec<&Eclipse> {
        sorted_chronologically(
            self.eclipses
                .values()
                .filter(|eclipse| eclipse.canon_plate_number() == plate)
                .collect(),
        )
    }

    /// Find eclipses whose greatest eclipse lies within a bounding box
    pub fn in_region(&self, region: &GeographicRegion) -> Vec<&Eclipse> {
        sorted_chronologically(
            self.eclipses
                .values()
                .filter(|eclipse| region.contains(eclipse))
                .collect(),
        )
    }

    /// Find eclipses by multiple criteria
    ///
    /// Only eclipses matching ALL specified criteria are returned, in
    /// chronological order.
    pub fn find_by_criteria(&self, criteria: &SearchCriteria) -> Vec<&Eclipse> {
        let matches = self
            .eclipses
            .values()
            .filter(|eclipse| criteria.matches(eclipse))
            .collect();

        let mut matches = sorted_chronologically(matches);
        if let Some(limit) = criteria.limit {
            matches.truncate(limit);
        }
        matches
    }

    /// Get the distinct Saros series present, in ascending order
    pub fn saros_series(&self) -> Vec<i32> {
        self.eclipses
            .values()
            .map(|eclipse| eclipse.saros)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Get basic statistics about the catalog contents
    pub fn get_statistics(&self) -> CatalogStatistics {
        let mut by_kind = BTreeMap::new();
        for eclipse in self.eclipses.values() {
            *by_kind.entry(eclipse.kind().to_string()).or_insert(0) += 1;
        }

        CatalogStatistics {
            total_eclipses: self.eclipses.len(),
            saros_series: self.saros_series().len(),
            by_kind,
        }
    }
}

fn sorted_chronologically(mut eclipses: Vec<&Eclipse>) -> Vec<&Eclipse> {
    eclipses.sort_by(|a, b| a.time.cmp(&b.time).then(a.id.cmp(&b.id)));
    eclipses
}

/// Search criteria for multi-criteria eclipse queries
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Eclipse kind (hybrid subtypes are not distinguished)
    pub kind: Option<EclipseKind>,

    /// Saros series
    pub saros: Option<i32>,

    /// Time window of greatest eclipse
    pub period: Option<TimeRange>,

    /// Bounding box of the greatest eclipse location
    pub region: Option<GeographicRegion>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl SearchCriteria {
    /// Check a single eclipse against every specified criterion
    pub fn matches(&self, eclipse: &Eclipse) -> bool {
        if self.kind.is_some_and(|kind| eclipse.kind() != kind) {
            return false;
        }

        if self.saros.is_some_and(|saros| eclipse.saros != saros) {
            return false;
        }

        if let Some(ref period) = self.period {
            if eclipse.time < period.start || eclipse.time > period.end {
                return false;
            }
        }

        if let Some(ref region) = self.region {
            if !region.contains(eclipse) {
                return false;
            }
        }

        true
    }
}

/// Geographic region definition
#[derive(Debug, Clone)]
pub struct GeographicRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeographicRegion {
    pub fn contains(&self, eclipse: &Eclipse) -> bool {
        let location = eclipse.location;
        location.latitude >= self.min_lat
            && location.latitude <= self.max_lat
            && location.longitude >= self.min_lon
            && location.longitude <= self.max_lon
    }
}

/// Time range definition, inclusive at both ends
#[derive(Debug, Clone)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Basic statistics about the catalog contents
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogStatistics {
    pub total_eclipses: usize,
    pub saros_series: usize,
    pub by_kind: BTreeMap<String, usize>,
}
