//! Tests for catalog query functionality

use super::{create_located_record, create_sample_catalog, create_test_catalog};
use crate::app::models::EclipseKind;
use crate::app::services::eclipse_catalog::{GeographicRegion, SearchCriteria, TimeRange};
use chrono::{TimeZone, Utc};

#[test]
fn test_all_is_chronological() {
    let catalog = create_sample_catalog();
    let ids: Vec<i32> = catalog.all().iter().map(|e| e.id).collect();

    assert_eq!(ids, vec![9559, 9560, 9561, 9563, 9597]);
    assert_eq!(catalog.ids(), vec![9559, 9560, 9561, 9563, 9597]);
}

#[test]
fn test_all_breaks_time_ties_by_id() {
    // Same date and time, only the catalog number differs
    let catalog = create_test_catalog(&[
        create_located_record(30, 10.0, 10.0),
        create_located_record(10, 20.0, 20.0),
        create_located_record(20, 30.0, 30.0),
    ]);

    let ids: Vec<i32> = catalog.all().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn test_by_saros() {
    let catalog = create_sample_catalog();

    let series: Vec<i32> = catalog.by_saros(139).iter().map(|e| e.id).collect();
    assert_eq!(series, vec![9561, 9597]);
    assert!(catalog.by_saros(1).is_empty());
}

#[test]
fn test_by_kind() {
    let catalog = create_sample_catalog();

    assert_eq!(catalog.by_kind(EclipseKind::Total).len(), 2);
    assert_eq!(catalog.by_kind(EclipseKind::Annular).len(), 1);
    assert_eq!(catalog.by_kind(EclipseKind::Hybrid)[0].id, 9559);
    assert_eq!(catalog.by_kind(EclipseKind::Partial)[0].id, 9563);
}

#[test]
fn test_between_is_inclusive() {
    let catalog = create_sample_catalog();
    let start = Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();

    let ids: Vec<i32> = catalog.between(start, end).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![9560, 9561, 9563]);

    let exact = catalog.by_id(9561).unwrap().time;
    assert_eq!(catalog.between(exact, exact).len(), 1);
}

#[test]
fn test_by_canon_plate() {
    let catalog = create_sample_catalog();

    let plate: Vec<i32> = catalog.by_canon_plate(478).iter().map(|e| e.id).collect();
    assert_eq!(plate, vec![9559, 9560]);
    let plate: Vec<i32> = catalog.by_canon_plate(479).iter().map(|e| e.id).collect();
    assert_eq!(plate, vec![9561, 9563]);
    assert_eq!(catalog.by_canon_plate(480)[0].id, 9597);
    assert!(catalog.by_canon_plate(1).is_empty());
}

#[test]
fn test_in_region() {
    let catalog = create_test_catalog(&[
        create_located_record(1, 25.3, -104.1),
        create_located_record(2, -40.0, 150.0),
        create_located_record(3, 60.0, -20.0),
    ]);

    let north_america = GeographicRegion {
        min_lat: 10.0,
        max_lat: 70.0,
        min_lon: -130.0,
        max_lon: -60.0,
    };

    let found = catalog.in_region(&north_america);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
}

#[test]
fn test_find_by_criteria() {
    let catalog = create_sample_catalog();

    let criteria = SearchCriteria {
        kind: Some(EclipseKind::Total),
        period: Some(TimeRange {
            start: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2050, 1, 1, 0, 0, 0).unwrap(),
        }),
        ..Default::default()
    };
    let found = catalog.find_by_criteria(&criteria);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 9597);

    // Empty criteria match everything
    assert_eq!(catalog.find_by_criteria(&SearchCriteria::default()).len(), 5);

    let limited = SearchCriteria {
        saros: Some(139),
        limit: Some(1),
        ..Default::default()
    };
    let found = catalog.find_by_criteria(&limited);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 9561);
}

#[test]
fn test_saros_series_and_statistics() {
    let catalog = create_sample_catalog();

    assert_eq!(catalog.saros_series(), vec![129, 134, 139, 149]);

    let statistics = catalog.get_statistics();
    assert_eq!(statistics.total_eclipses, 5);
    assert_eq!(statistics.saros_series, 4);
    assert_eq!(statistics.by_kind["total"], 2);
    assert_eq!(statistics.by_kind["hybrid"], 1);
}
