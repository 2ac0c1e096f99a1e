//! Test fixtures for eclipse catalog testing

use crate::app::services::catalog_parser::CatalogParser;
use crate::app::services::catalog_parser::tests::{create_catalog_text, create_test_record};
use crate::app::services::eclipse_catalog::Catalog;

// Test modules
mod builder_tests;
mod query_tests;

/// Build a record for a given date, catalog number, Saros series and type
pub fn create_dated_record(
    (year, month, day): (i32, u32, u32),
    id: i32,
    saros: i32,
    type_code: &str,
) -> String {
    let year = year.to_string();
    let month = month.to_string();
    let day = day.to_string();
    let id = id.to_string();
    let saros = saros.to_string();
    let type_code = format!("\"{}\"", type_code);
    create_test_record(&[
        (0, year.as_str()),
        (1, month.as_str()),
        (2, day.as_str()),
        (6, saros.as_str()),
        (7, type_code.as_str()),
        (19, id.as_str()),
    ])
}

/// Build a record located at the given decimal coordinates
pub fn create_located_record(id: i32, latitude: f64, longitude: f64) -> String {
    let id = id.to_string();
    let latitude = latitude.to_string();
    let longitude = longitude.to_string();
    create_test_record(&[
        (19, id.as_str()),
        (12, latitude.as_str()),
        (13, longitude.as_str()),
    ])
}

/// Build a catalog from record lines
pub fn create_test_catalog(records: &[String]) -> Catalog {
    Catalog::from_text("test", &create_catalog_text(records), &CatalogParser::new())
}

/// Small catalog spanning three Saros series and all four kinds
///
/// Records are deliberately out of chronological order.
pub fn create_sample_catalog() -> Catalog {
    create_test_catalog(&[
        create_dated_record((2024, 4, 8), 9561, 139, "T"),
        create_dated_record((2023, 10, 14), 9560, 134, "A"),
        create_dated_record((2023, 4, 20), 9559, 129, "H3"),
        create_dated_record((2025, 3, 29), 9563, 149, "P"),
        create_dated_record((2042, 4, 20), 9597, 139, "T"),
    ])
}
