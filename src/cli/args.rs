//! Command-line argument definitions for the eclipse catalog tool
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::models::EclipseKind;
use crate::app::services::eclipse_catalog::{GeographicRegion, SearchCriteria, TimeRange};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the eclipse catalog tool
///
/// Loads NASA's five-millennium solar eclipse catalog and answers lookups
/// by catalog number, Saros series, eclipse kind and date range.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "eclipse-catalog",
    version,
    about = "Query NASA's five-millennium solar eclipse catalog",
    long_about = "Decodes the delimited solar eclipse catalog published by NASA GSFC into typed \
                  eclipse records, including the Besselian elements, and reports on them. \
                  Malformed records are skipped and counted; the load still succeeds."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the catalog file
    ///
    /// Overrides the configuration file and ECLIPSE_CATALOG_PATH.
    #[arg(
        long = "catalog",
        value_name = "PATH",
        global = true,
        help = "Path to the delimited eclipse catalog"
    )]
    pub catalog_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/eclipse-catalog/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Load deadline in seconds, 0 waits indefinitely
    #[arg(
        long = "timeout",
        value_name = "SECS",
        global = true,
        help = "Catalog load deadline in seconds (0 disables)"
    )]
    pub timeout_secs: Option<u64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Report load statistics and catalog metadata
    Summary,
    /// Show a single eclipse by catalog number
    Show(ShowArgs),
    /// List eclipses matching filters, in chronological order
    List(ListArgs),
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Catalog number of the eclipse
    #[arg(long = "id", value_name = "N", help = "Catalog number of the eclipse")]
    pub id: i32,
}

/// Arguments for the list command
#[derive(Debug, Clone, Default, Parser)]
pub struct ListArgs {
    /// Only eclipses of this Saros series
    #[arg(long = "saros", value_name = "N", help = "Filter by Saros series")]
    pub saros: Option<i32>,

    /// Only eclipses of this kind
    #[arg(
        long = "kind",
        value_name = "KIND",
        help = "Filter by kind (total, annular, partial, hybrid)"
    )]
    pub kind: Option<EclipseKind>,

    /// First year to include
    ///
    /// Negative years are astronomical (year 0 is 1 BCE).
    #[arg(
        long = "from-year",
        value_name = "YEAR",
        allow_negative_numbers = true,
        help = "First year to include"
    )]
    pub from_year: Option<i32>,

    /// Last year to include
    #[arg(
        long = "to-year",
        value_name = "YEAR",
        allow_negative_numbers = true,
        help = "Last year to include"
    )]
    pub to_year: Option<i32>,

    /// Filter by geographic region
    ///
    /// Specify a bounding box as min_lat,max_lat,min_lon,max_lon
    #[arg(
        long = "region",
        value_name = "BBOX",
        allow_hyphen_values = true,
        help = "Filter by bounding box of greatest eclipse (min_lat,max_lat,min_lon,max_lon)"
    )]
    pub region: Option<String>,

    /// Maximum number of eclipses to list
    #[arg(long = "limit", value_name = "N", help = "Maximum number of eclipses to list")]
    pub limit: Option<usize>,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command, defaulting to `summary`
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Summary)
    }

    /// Log level derived from -v/-q, falling back to the configured level
    pub fn get_log_level<'a>(&self, configured: &'a str) -> &'a str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => configured,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Validate the global arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(Commands::List(list_args)) = &self.command {
            list_args.validate()?;
        }

        Ok(())
    }
}

impl ListArgs {
    /// Validate filter values
    pub fn validate(&self) -> Result<()> {
        if let (Some(from), Some(to)) = (self.from_year, self.to_year) {
            if from > to {
                return Err(Error::configuration(format!(
                    "--from-year ({}) must not be after --to-year ({})",
                    from, to
                )));
            }
        }

        if self.limit == Some(0) {
            return Err(Error::configuration("--limit must be greater than 0"));
        }

        if let Some(region) = &self.region {
            parse_region(region)?;
        }

        Ok(())
    }

    /// Translate the filters into catalog search criteria
    pub fn to_criteria(&self) -> Result<SearchCriteria> {
        let period = match (self.from_year, self.to_year) {
            (None, None) => None,
            (from, to) => Some(TimeRange {
                start: match from {
                    Some(year) => start_of_year(year)?,
                    None => DateTime::<Utc>::MIN_UTC,
                },
                end: match to {
                    Some(year) => end_of_year(year)?,
                    None => DateTime::<Utc>::MAX_UTC,
                },
            }),
        };

        let region = self.region.as_deref().map(parse_region).transpose()?;

        Ok(SearchCriteria {
            kind: self.kind,
            saros: self.saros,
            period,
            region,
            limit: self.limit,
        })
    }
}

fn start_of_year(year: i32) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
        .ok_or_else(|| Error::configuration(format!("Year out of range: {}", year)))
}

fn end_of_year(year: i32) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .map(|datetime| datetime.and_utc())
        .ok_or_else(|| Error::configuration(format!("Year out of range: {}", year)))
}

/// Parse region bounding box string
pub fn parse_region(region: &str) -> Result<GeographicRegion> {
    let parts: Vec<&str> = region.split(',').collect();
    if parts.len() != 4 {
        return Err(Error::configuration(
            "Region must be in format: min_lat,max_lat,min_lon,max_lon",
        ));
    }

    let parse = |name: &str, value: &str| -> Result<f64> {
        value
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid {}: {}", name, value)))
    };

    let region = GeographicRegion {
        min_lat: parse("min_lat", parts[0])?,
        max_lat: parse("max_lat", parts[1])?,
        min_lon: parse("min_lon", parts[2])?,
        max_lon: parse("max_lon", parts[3])?,
    };

    if region.min_lat >= region.max_lat {
        return Err(Error::configuration("min_lat must be less than max_lat"));
    }
    if region.min_lon >= region.max_lon {
        return Err(Error::configuration("min_lon must be less than max_lon"));
    }

    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_list_command() {
        let args = Args::try_parse_from([
            "eclipse-catalog",
            "list",
            "--saros",
            "139",
            "--kind",
            "total",
            "--from-year",
            "-1999",
            "--limit",
            "5",
        ])
        .unwrap();

        match args.get_command() {
            Commands::List(list) => {
                assert_eq!(list.saros, Some(139));
                assert_eq!(list.kind, Some(EclipseKind::Total));
                assert_eq!(list.from_year, Some(-1999));
                assert_eq!(list.limit, Some(5));
            }
            other => panic!("Expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "eclipse-catalog",
            "show",
            "--id",
            "9561",
            "--output-format",
            "json",
            "--timeout",
            "0",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.timeout_secs, Some(0));
        assert_eq!(args.get_log_level("warn"), "debug");
        assert!(matches!(args.get_command(), Commands::Show(ShowArgs { id: 9561 })));
    }

    #[test]
    fn test_default_command_is_summary() {
        let args = Args::try_parse_from(["eclipse-catalog"]).unwrap();
        assert!(matches!(args.get_command(), Commands::Summary));
        assert_eq!(args.get_log_level("warn"), "warn");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["eclipse-catalog", "-q", "-v"]).is_err());

        let args = Args::try_parse_from(["eclipse-catalog", "-q"]).unwrap();
        assert_eq!(args.get_log_level("info"), "error");
    }

    #[test]
    fn test_invalid_kind_rejected() {
        assert!(Args::try_parse_from(["eclipse-catalog", "list", "--kind", "ring"]).is_err());
    }

    #[test]
    fn test_list_validation() {
        let args = ListArgs {
            from_year: Some(2030),
            to_year: Some(2020),
            ..Default::default()
        };
        assert!(args.validate().is_err());

        let args = ListArgs {
            limit: Some(0),
            ..Default::default()
        };
        assert!(args.validate().is_err());

        let args = ListArgs {
            region: Some("10,0,0,10".to_string()),
            ..Default::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_to_criteria_year_bounds() {
        let args = ListArgs {
            from_year: Some(2024),
            to_year: Some(2025),
            ..Default::default()
        };
        let period = args.to_criteria().unwrap().period.unwrap();

        assert_eq!(period.start.year(), 2024);
        assert_eq!(period.start.month(), 1);
        assert_eq!(period.end.year(), 2025);
        assert_eq!(period.end.month(), 12);

        let args = ListArgs {
            to_year: Some(1000),
            ..Default::default()
        };
        let period = args.to_criteria().unwrap().period.unwrap();
        assert_eq!(period.start, DateTime::<Utc>::MIN_UTC);

        assert!(ListArgs::default().to_criteria().unwrap().period.is_none());
    }

    #[test]
    fn test_parse_region() {
        let region = parse_region("10, 70, -130, -60").unwrap();
        assert_eq!(region.min_lat, 10.0);
        assert_eq!(region.max_lon, -60.0);

        assert!(parse_region("10,70,-130").is_err());
        assert!(parse_region("a,70,-130,-60").is_err());
    }
}
