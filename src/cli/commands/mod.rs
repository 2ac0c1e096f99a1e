//! Command implementations for the eclipse catalog CLI
//!
//! Each command is implemented in its own module; this module loads the
//! configuration and the catalog once and dispatches.

pub mod list;
pub mod shared;
pub mod show;
pub mod summary;

use crate::Result;
use crate::cli::args::{Args, Commands};
use crate::config::Config;
use tracing::debug;

/// Main command runner
///
/// Builds the layered configuration, sets up logging, loads the catalog and
/// dispatches to the subcommand handler:
/// - `summary`: load statistics and catalog metadata
/// - `show`: a single eclipse by catalog number
/// - `list`: filtered chronological listing
pub async fn run(args: Args) -> Result<()> {
    let config = Config::load_layered(
        args.catalog_path.clone(),
        args.config_file.as_deref(),
        args.timeout_secs,
    )?;

    shared::setup_logging(&args, &config)?;
    debug!("Arguments: {:?}", args);
    debug!("Effective configuration: {:?}", config);

    args.validate()?;

    let catalog = shared::load_catalog(&args, &config).await?;

    let output = match args.get_command() {
        Commands::Summary => summary::render_summary(&catalog, args.output_format)?,
        Commands::Show(show_args) => show::render_eclipse(&catalog, &show_args, args.output_format)?,
        Commands::List(list_args) => list::render_list(&catalog, &list_args, args.output_format)?,
    };

    println!("{}", output);
    Ok(())
}
