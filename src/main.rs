//! EDL Chopper
//!
//! Splits a rendered video into one file per timeline marker.
//!
//! # Process
//!
//! - Place a timeline marker at every split point, named after the file it
//!   starts, plus one final marker where the last segment ends
//! - Render the timeline and export its markers as an EDL
//! - Run the chop command; each segment is stream-copied, so cuts land on
//!   the nearest keyframe rather than the exact frame
//!
//! # Usage
//!
//! ```bash
//! chopper chop --edl markers.edl --input render.mov --output ./result/ --fps 24
//! chopper list --edl markers.edl --json
//! chopper chop --dry-run
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use edl_chopper::adapters::TomlConfigAdapter;
use edl_chopper::cli::{commands, Cli, Commands};
use edl_chopper::utils::logging::{LoggingConfig, LoggingSystem};

/// Main entry point for the EDL Chopper CLI application
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    LoggingSystem::new(LoggingConfig {
        level: cli.log_level,
        format: cli.log_format,
        ..LoggingConfig::default()
    })
    .initialize();

    info!("Starting EDL Chopper {}", env!("CARGO_PKG_VERSION"));

    let file_config =
        TomlConfigAdapter::discover(cli.config.as_deref()).context("Failed to load configuration")?;

    // Execute the requested command
    match cli.command {
        Commands::Chop(args) => {
            info!("Executing chop command");
            commands::chop(args, file_config.as_ref()).await?;
        }
        Commands::List(args) => {
            info!("Executing list command");
            commands::list(args, file_config.as_ref()).await?;
        }
    }

    info!("EDL Chopper completed successfully");
    Ok(())
}
