//! Shared components for CLI commands
//!
//! Logging setup, catalog loading with a progress spinner, and small
//! formatting helpers used by more than one command.

use crate::app::services::catalog_loader::{CatalogLoader, FileSource};
use crate::app::services::eclipse_catalog::Catalog;
use crate::cli::args::{Args, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Set up structured logging
///
/// `RUST_LOG` wins over -v/-q, which win over the configured level.
pub fn setup_logging(args: &Args, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level(&config.logging.level);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("eclipse_catalog={}", log_level)));

    let result = if args.quiet || config.logging.structured {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a simple spinner for the catalog load
pub fn create_spinner(message: &str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load the configured catalog file
pub async fn load_catalog(args: &Args, config: &Config) -> Result<Arc<Catalog>> {
    let source = FileSource::new(&config.catalog.path);
    let loader = CatalogLoader::with_config(source, config);

    // Keep machine-readable output clean of spinner frames
    let hidden = args.quiet || args.output_format != OutputFormat::Human;
    let spinner = create_spinner(
        &format!("Loading catalog {}", config.catalog.path.display()),
        hidden,
    );

    let result = loader.load().await;
    spinner.finish_and_clear();

    let catalog = result?;
    info!(
        "Catalog ready: {} eclipses ({})",
        catalog.len(),
        catalog.stats().summary()
    );
    Ok(catalog)
}

/// Serialize a report as pretty JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization(format!("Failed to serialize report: {}", e)))
}

/// Escape CSV field values
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Format an optional value, empty when absent
pub fn optional_field(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

/// Format a duration in seconds as `MMmSSs`
pub fn format_central_duration(seconds: f64) -> String {
    let total = seconds.round().max(0.0) as u64;
    format!("{:02}m{:02}s", total / 60, total % 60)
}
