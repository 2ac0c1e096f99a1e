//! Test fixtures for catalog parser testing
//!
//! Records are built from a complete 45-field row (the 2024 April 8 total
//! eclipse) with individual fields overridden per test.


/// Header line as distributed with the catalog
pub const CATALOG_HEADER: &str = "Year,Month,Day,Time of Greatest Eclipse,Delta T,Luna Num,Saros Num,Eclipse Type,Gamma,Eclipse Magnitude,Latitude,Longitude,Latitude Decimal,Longitude Decimal,Sun Alt,Sun Azm,Path Width (km),Central Duration,Central Duration Seconds,Catalog Number,Canon Plate,Julian Date,t0,x0,x1,x2,x3,y0,y1,y2,y3,d0,d1,d2,mu0,mu1,mu2,l10,l11,l12,l20,l21,l22,tan f1,tan f2";

/// Fields of a complete total eclipse record
pub fn base_fields() -> Vec<String> {
    [
        "2024",
        "4",
        "8",
        "\"18:18:29\"",
        "74",
        "292",
        "139",
        "\"T\"",
        "0.3431",
        "1.0566",
        "\"25.3N\"",
        "\"104.1W\"",
        "25.3",
        "-104.1",
        "70",
        "147",
        "198",
        "\"04m28s\"",
        "268",
        "9561",
        "479",
        "2460409.262841",
        "18.0",
        "-0.318244",
        "0.5117116",
        "0.0000326",
        "-0.0000085",
        "0.219764",
        "0.2709589",
        "-0.0000595",
        "-0.0000047",
        "7.5862",
        "0.014844",
        "-0.000002",
        "89.591217",
        "15.004080",
        "0.000000",
        "0.535814",
        "0.0000618",
        "-0.0000128",
        "-0.010272",
        "0.0000615",
        "-0.0000127",
        "0.0046683",
        "0.0046450",
    ]
    .iter()
    .map(|field| field.to_string())
    .collect()
}

/// Build a record from the base fields with overrides applied
pub fn create_test_record(overrides: &[(usize, &str)]) -> String {
    let mut fields = base_fields();
    for (index, value) in overrides {
        fields[*index] = value.to_string();
    }
    fields.join(",")
}

/// Build a record with a specific catalog number and type code
pub fn create_record_with_id(id: i32, type_code: &str) -> String {
    let id = id.to_string();
    let type_code = format!("\"{}\"", type_code);
    create_test_record(&[(19, id.as_str()), (7, type_code.as_str())])
}

/// Build a catalog text: header followed by the given records
pub fn create_catalog_text(records: &[String]) -> String {
    let mut lines = vec![CATALOG_HEADER.to_string()];
    lines.extend(records.iter().cloned());
    lines.join("\n")
}
