use clap::Parser;
use eclipse_catalog::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            // Without a signal handler, never resolve and let the command finish
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(eclipse_catalog::Error::processing_interrupted(
                    "Interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            let code = match error {
                eclipse_catalog::Error::EclipseNotFound { .. } => 2,
                eclipse_catalog::Error::ProcessingInterrupted { .. } => 130,
                _ => 1,
            };
            process::exit(code);
        }
    }
}
