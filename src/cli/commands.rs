//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::toml_config::FileConfig;
use crate::app::{AppContainer, ChopInteractor, ChopReport, DefaultAppContainer};
use crate::cli::args::{ChopArgs, ListArgs};
use crate::config_initialization::{resolve_chop_request, resolve_list_config};
use crate::domain::model::Segment;

/// Execute the chop command
pub async fn chop(args: ChopArgs, file_config: Option<&FileConfig>) -> Result<()> {
    info!("Starting chop operation");

    let request = resolve_chop_request(&args, file_config).context("Invalid configuration")?;
    let container = DefaultAppContainer::new(args.dry_run);
    let interactor = container.chop_interactor();

    // Every segment and command is built before the first cut runs
    let plan = interactor
        .prepare(&request)
        .await
        .with_context(|| format!("Failed to read segments from {}", request.edl_path.display()))?;

    display_segments(&request.settings.input, &plan.segments);

    let report = interactor
        .run(&plan, &request)
        .await
        .context("Failed to cut segments")?;

    if args.dry_run {
        for outcome in &report.outcomes {
            println!("{}", outcome.command_line);
        }
    }
    println!();

    report_failures(&report);
    info!("Chop operation completed");
    Ok(())
}

/// Execute the list command
pub async fn list(args: ListArgs, file_config: Option<&FileConfig>) -> Result<()> {
    info!("Starting list operation");

    let (edl_path, frame_rate) =
        resolve_list_config(&args, file_config).context("Invalid configuration")?;
    let segments = ChopInteractor::load_segments(&edl_path, frame_rate)
        .await
        .with_context(|| format!("Failed to read segments from {}", edl_path.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&segments)
            .context("Failed to serialize segments to JSON")?;
        println!("{}", json);
    } else {
        println!("{} segments in {}:", segments.len(), edl_path.display());
        for segment in &segments {
            println!("  {}", segment);
        }
    }

    info!("List operation completed");
    Ok(())
}

/// Display the segments about to be cut
fn display_segments(input: &Path, segments: &[Segment]) {
    println!();
    println!("dividing \"{}\" into segments:", input.display());
    for segment in segments {
        println!("  {}", segment);
    }
}

fn report_failures(report: &ChopReport) {
    for outcome in report.failures() {
        match outcome.exit_code {
            Some(code) => warn!("Segment '{}' exited with code {}", outcome.segment, code),
            None => warn!("Segment '{}' was terminated by a signal", outcome.segment),
        }
    }
}
