//! Tests for catalog construction

use super::{create_dated_record, create_test_catalog};
use crate::Error;
use crate::app::models::EclipseKind;
use crate::app::services::catalog_parser::CatalogParser;
use crate::app::services::catalog_parser::tests::{CATALOG_HEADER, create_catalog_text};
use crate::app::services::eclipse_catalog::Catalog;

#[test]
fn test_build_indexes_by_catalog_number() {
    let catalog = create_test_catalog(&[
        create_dated_record((2024, 4, 8), 9561, 139, "T"),
        create_dated_record((2023, 10, 14), 9560, 134, "A"),
    ]);

    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains(9561));
    assert!(catalog.contains(9560));
    assert!(!catalog.contains(1));
    assert_eq!(catalog.by_id(9560).unwrap().saros, 134);
    assert_eq!(catalog.source_name(), "test");
}

#[test]
fn test_duplicate_catalog_number_last_write_wins() {
    let catalog = create_test_catalog(&[
        create_dated_record((2024, 4, 8), 42, 139, "T"),
        create_dated_record((2023, 10, 14), 42, 134, "A"),
    ]);

    assert_eq!(catalog.len(), 1);
    let eclipse = catalog.by_id(42).unwrap();
    assert_eq!(eclipse.saros, 134);
    assert_eq!(eclipse.kind(), EclipseKind::Annular);
    assert_eq!(catalog.stats().duplicate_ids, 1);
    assert_eq!(catalog.stats().records_decoded, 2);
}

#[test]
fn test_skipped_records_do_not_enter_catalog() {
    let catalog = create_test_catalog(&[
        create_dated_record((2024, 4, 8), 9561, 139, "T"),
        "2024,4,8,\"18:17:16\",74".to_string(),
        create_dated_record((2023, 10, 14), 9560, 134, "X"),
    ]);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.stats().total_records, 3);
    assert_eq!(catalog.stats().records_skipped, 2);
}

#[test]
fn test_header_only_text_builds_empty_catalog() {
    let catalog = Catalog::from_text("empty", CATALOG_HEADER, &CatalogParser::new());

    assert!(catalog.is_empty());
    assert_eq!(catalog.stats().total_records, 0);
    assert!(catalog.all().is_empty());
}

#[test]
fn test_require_missing_eclipse() {
    let catalog = Catalog::from_text(
        "test",
        &create_catalog_text(&[create_dated_record((2024, 4, 8), 9561, 139, "T")]),
        &CatalogParser::new(),
    );

    assert!(catalog.require(9561).is_ok());
    match catalog.require(7) {
        Err(Error::EclipseNotFound { id }) => assert_eq!(id, 7),
        other => panic!("Expected EclipseNotFound, got {:?}", other),
    }
}
