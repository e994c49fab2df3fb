//! Configuration initialization and hierarchy management
//!
//! Precedence: CLI arguments and their environment variables, then the
//! config file, then built-in defaults.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::adapters::toml_config::FileConfig;
use crate::app::chop_interactor::ChopRequest;
use crate::cli::args::{ChopArgs, ListArgs};
use crate::domain::command::CutSettings;
use crate::domain::model::FrameRate;
use crate::error::ChopperResult;

pub const DEFAULT_EDL: &str = "input.edl";
pub const DEFAULT_INPUT: &str = "input.mov";
pub const DEFAULT_OUTPUT: &str = "./result/";
pub const DEFAULT_FFMPEG: &str = "ffmpeg";
pub const DEFAULT_JOBS: usize = 1;

/// Resolve the chop command's settings
pub fn resolve_chop_request(args: &ChopArgs, file: Option<&FileConfig>) -> ChopperResult<ChopRequest> {
    let file = file.cloned().unwrap_or_default();

    let edl_path = pick(args.edl.clone(), file.edl, PathBuf::from(DEFAULT_EDL));
    let input = pick(args.input.clone(), file.input, PathBuf::from(DEFAULT_INPUT));
    let output_dir = pick(args.output.clone(), file.output, PathBuf::from(DEFAULT_OUTPUT));
    let frame_rate = FrameRate::new(pick(args.fps, file.fps, FrameRate::DEFAULT_FPS))?;
    let program = pick(args.ffmpeg.clone(), file.ffmpeg, DEFAULT_FFMPEG.to_string());
    let jobs = resolve_jobs(pick(args.jobs, file.jobs, DEFAULT_JOBS));
    let verbose = pick(args.verbose, file.verbose, false);
    let overwrite = pick(args.overwrite, file.overwrite, false);

    let request = ChopRequest {
        edl_path,
        frame_rate,
        settings: CutSettings {
            program,
            input,
            output_dir,
            verbose,
            overwrite,
        },
        jobs,
    };

    info!(
        "Configuration: edl={}, input={}, output={}, {}, jobs={}",
        request.edl_path.display(),
        request.settings.input.display(),
        request.settings.output_dir.display(),
        request.frame_rate,
        request.jobs
    );
    Ok(request)
}

/// Resolve the EDL path and frame rate for the list command
pub fn resolve_list_config(
    args: &ListArgs,
    file: Option<&FileConfig>,
) -> ChopperResult<(PathBuf, FrameRate)> {
    let file = file.cloned().unwrap_or_default();

    let edl_path = pick(args.edl.clone(), file.edl, PathBuf::from(DEFAULT_EDL));
    let frame_rate = FrameRate::new(pick(args.fps, file.fps, FrameRate::DEFAULT_FPS))?;

    debug!("List configuration: edl={}, {}", edl_path.display(), frame_rate);
    Ok((edl_path, frame_rate))
}

/// `0` means one job per CPU
fn resolve_jobs(jobs: usize) -> usize {
    if jobs == 0 {
        num_cpus::get()
    } else {
        jobs
    }
}

fn pick<T>(cli: Option<T>, file: Option<T>, default: T) -> T {
    cli.or(file).unwrap_or(default)
}
