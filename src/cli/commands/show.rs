//! Show command implementation

use super::list::{CSV_HEADER, csv_row};
use super::shared::{format_central_duration, to_json};
use crate::Result;
use crate::app::models::Eclipse;
use crate::app::services::eclipse_catalog::Catalog;
use crate::cli::args::{OutputFormat, ShowArgs};
use colored::*;
use serde_json::json;

/// Render one eclipse, failing with `EclipseNotFound` for unknown ids
pub fn render_eclipse(catalog: &Catalog, args: &ShowArgs, format: OutputFormat) -> Result<String> {
    let eclipse = catalog.require(args.id)?;

    match format {
        OutputFormat::Human => Ok(render_human_eclipse(eclipse)),
        OutputFormat::Json => to_json(&json!({
            "eclipse": eclipse,
            "kind": eclipse.kind().to_string(),
            "canon_plate": eclipse.canon_plate_number(),
        })),
        OutputFormat::Csv => Ok(render_csv_eclipse(eclipse)),
    }
}

fn render_human_eclipse(eclipse: &Eclipse) -> String {
    let b = &eclipse.besselian;

    let mut output = format!(
        "{} {}\n",
        format!("Eclipse {}", eclipse.id).bright_green().bold(),
        format!("({}, {})", eclipse.kind(), eclipse.eclipse_type).bright_black()
    );

    output.push_str(&format!(
        "  Greatest eclipse:  {}\n",
        eclipse.time.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "  Saros / lunation:  {} / {}\n",
        eclipse.saros, eclipse.luna
    ));
    output.push_str(&format!(
        "  Canon plate:       {}\n",
        eclipse.canon_plate_number()
    ));
    output.push_str(&format!(
        "  Gamma / magnitude: {:.4} / {:.4}\n",
        eclipse.gamma, eclipse.magnitude
    ));
    output.push_str(&format!(
        "  Location:          {:.1}, {:.1}\n",
        eclipse.location.latitude, eclipse.location.longitude
    ));
    output.push_str(&format!(
        "  Sun azimuth:       {}°\n",
        eclipse.sun_position.azimuth
    ));

    if let Some(altitude) = eclipse.sun_position.altitude {
        output.push_str(&format!("  Sun altitude:      {}°\n", altitude));
    }
    if let Some(width) = eclipse.path_width_km {
        output.push_str(&format!("  Path width:        {} km\n", width));
    }
    if let Some(duration) = eclipse.duration_secs {
        output.push_str(&format!(
            "  Central duration:  {}\n",
            format_central_duration(duration)
        ));
    }

    output.push_str(&format!(
        "\n  {} (t0 = {} TD)\n",
        "Besselian elements".bright_cyan(),
        b.t0
    ));
    output.push_str(&format!("    x:      {:?}\n", b.x_coefficients));
    output.push_str(&format!("    y:      {:?}\n", b.y_coefficients));
    output.push_str(&format!("    d:      {:?}\n", b.axis_declination_coefficients));
    output.push_str(&format!("    mu:     {:?}\n", b.axis_hour_angle_coefficients));
    output.push_str(&format!("    l1:     {:?}\n", b.penumbral_radius_coefficients));
    output.push_str(&format!("    l2:     {:?}\n", b.umbral_radius_coefficients));
    output.push_str(&format!("    tan f1: {}\n", b.tan_penumbral_axis_angle));
    output.push_str(&format!("    tan f2: {}\n", b.tan_umbral_axis_angle));

    output
}

fn render_csv_eclipse(eclipse: &Eclipse) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    csv.push_str(&csv_row(eclipse));
    csv.push('\n');
    csv
}
