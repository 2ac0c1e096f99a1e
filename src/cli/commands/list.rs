//! List command implementation
//!
//! Chronological listing of the eclipses matching the command-line filters.

use super::shared::{csv_escape, format_central_duration, optional_field, to_json};
use crate::Result;
use crate::app::models::Eclipse;
use crate::app::services::eclipse_catalog::Catalog;
use crate::cli::args::{ListArgs, OutputFormat};
use colored::*;
use serde_json::json;
use tracing::debug;

/// Column header for eclipse CSV output
pub const CSV_HEADER: &str = "id,date,time,type,saros,luna,gamma,magnitude,latitude,longitude,sun_altitude,sun_azimuth,path_width_km,duration_secs,canon_plate";

/// Render the filtered listing in the requested format
pub fn render_list(catalog: &Catalog, args: &ListArgs, format: OutputFormat) -> Result<String> {
    let criteria = args.to_criteria()?;
    debug!("List criteria: {:?}", criteria);

    let eclipses = catalog.find_by_criteria(&criteria);

    match format {
        OutputFormat::Human => Ok(render_human_list(catalog, &eclipses)),
        OutputFormat::Json => to_json(&json!({
            "count": eclipses.len(),
            "filters_applied": {
                "saros": args.saros,
                "kind": args.kind.map(|kind| kind.to_string()),
                "from_year": args.from_year,
                "to_year": args.to_year,
                "region": args.region,
                "limit": args.limit
            },
            "eclipses": eclipses
        })),
        OutputFormat::Csv => Ok(render_csv_list(&eclipses)),
    }
}

fn render_human_list(catalog: &Catalog, eclipses: &[&Eclipse]) -> String {
    let mut output = format!(
        "{}\n",
        format!(
            "{} of {} eclipses",
            eclipses.len(),
            catalog.len()
        )
        .bright_green()
        .bold()
    );

    for eclipse in eclipses {
        output.push_str(&format!(
            "  {} {}\n",
            format!("{:>5}", eclipse.id).bright_yellow(),
            describe(eclipse)
        ));
    }

    output
}

fn render_csv_list(eclipses: &[&Eclipse]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for eclipse in eclipses {
        csv.push_str(&csv_row(eclipse));
        csv.push('\n');
    }
    csv
}

/// Single-line description used in listings
pub fn describe(eclipse: &Eclipse) -> String {
    let central = match (eclipse.path_width_km, eclipse.duration_secs) {
        (Some(width), Some(duration)) => {
            format!(", {} km, {}", width, format_central_duration(duration))
        }
        _ => String::new(),
    };

    format!(
        "{} {:<3} saros {:>3} at {:.1}, {:.1}{}",
        eclipse.time.format("%Y-%m-%d %H:%M"),
        eclipse.eclipse_type.code(),
        eclipse.saros,
        eclipse.location.latitude,
        eclipse.location.longitude,
        central
    )
}

/// One CSV row; partial eclipses leave the central fields blank
pub fn csv_row(eclipse: &Eclipse) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        eclipse.id,
        eclipse.time.format("%Y-%m-%d"),
        eclipse.time.format("%H:%M:%S"),
        csv_escape(&eclipse.eclipse_type.code()),
        eclipse.saros,
        eclipse.luna,
        eclipse.gamma,
        eclipse.magnitude,
        eclipse.location.latitude,
        eclipse.location.longitude,
        optional_field(eclipse.sun_position.altitude),
        eclipse.sun_position.azimuth,
        optional_field(eclipse.path_width_km),
        optional_field(eclipse.duration_secs),
        eclipse.canon_plate_number()
    )
}
