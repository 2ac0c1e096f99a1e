//! Summary command implementation
//!
//! Reports how the load went (decode statistics) and what the catalog
//! contains (span, kinds, Saros series).

use super::shared::to_json;
use crate::Result;
use crate::app::models::EclipseKind;
use crate::app::services::eclipse_catalog::Catalog;
use crate::cli::args::OutputFormat;
use colored::*;
use serde_json::json;

/// Render the catalog summary in the requested format
pub fn render_summary(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human_summary(catalog)),
        OutputFormat::Json => render_json_summary(catalog),
        OutputFormat::Csv => Ok(render_csv_summary(catalog)),
    }
}

fn render_human_summary(catalog: &Catalog) -> String {
    let metadata = catalog.metadata();
    let statistics = catalog.get_statistics();
    let stats = &metadata.stats;

    let mut output = format!(
        "{}\n{}\n",
        "🌑 Solar Eclipse Catalog".bright_green().bold(),
        "========================".bright_green()
    );

    output.push_str(&format!("📁 Source: {}\n", metadata.source_name.bright_cyan()));
    output.push_str(&format!(
        "🌒 Eclipses: {}\n",
        metadata.eclipse_count.to_string().bright_yellow().bold()
    ));
    if let (Some(earliest), Some(latest)) = (metadata.earliest, metadata.latest) {
        output.push_str(&format!(
            "📅 Span: {} to {}\n",
            earliest.format("%Y-%m-%d"),
            latest.format("%Y-%m-%d")
        ));
    }
    output.push_str(&format!(
        "🔁 Saros series: {}\n",
        statistics.saros_series
    ));
    output.push_str(&format!(
        "⏱️  Load Time: {:.2}s\n\n",
        metadata.load_duration.as_secs_f64()
    ));

    output.push_str("By kind:\n");
    for kind in EclipseKind::all_values() {
        let count = statistics
            .by_kind
            .get(&kind.to_string())
            .copied()
            .unwrap_or(0);
        output.push_str(&format!("  {:<8} {}\n", kind.to_string(), count));
    }

    output.push_str(&format!(
        "\nDecode: {} of {} records ({:.1}%), {} skipped, {} duplicate ids, {} field fallbacks\n",
        stats.records_decoded,
        stats.total_records,
        stats.success_rate(),
        stats.records_skipped,
        stats.duplicate_ids,
        stats.field_fallbacks
    ));

    if !stats.fallbacks_by_field.is_empty() {
        output.push_str("Fallbacks by field:\n");
        for (field, count) in &stats.fallbacks_by_field {
            output.push_str(&format!("  {:<18} {}\n", field, count));
        }
    }

    if !stats.errors.is_empty() {
        output.push_str(&format!(
            "{}\n",
            format!("⚠️  Skipped records ({} shown):", stats.errors.len()).yellow()
        ));
        for error in &stats.errors {
            output.push_str(&format!("  {}\n", error));
        }
    }

    output
}

fn render_json_summary(catalog: &Catalog) -> Result<String> {
    let report = json!({
        "metadata": catalog.metadata(),
        "statistics": catalog.get_statistics(),
        "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
    });
    to_json(&report)
}

fn render_csv_summary(catalog: &Catalog) -> String {
    let statistics = catalog.get_statistics();
    let stats = catalog.stats();

    let mut csv = String::from("metric,value\n");
    let mut push = |metric: &str, value: String| {
        csv.push_str(&format!("{},{}\n", metric, value));
    };

    push("eclipses", statistics.total_eclipses.to_string());
    push("saros_series", statistics.saros_series.to_string());
    for kind in EclipseKind::all_values() {
        let count = statistics
            .by_kind
            .get(&kind.to_string())
            .copied()
            .unwrap_or(0);
        push(&format!("kind_{}", kind), count.to_string());
    }
    push("records_total", stats.total_records.to_string());
    push("records_decoded", stats.records_decoded.to_string());
    push("records_skipped", stats.records_skipped.to_string());
    push("duplicate_ids", stats.duplicate_ids.to_string());
    push("field_fallbacks", stats.field_fallbacks.to_string());

    csv
}
