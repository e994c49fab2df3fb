//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the chop command
#[derive(Args, Debug, Clone, Default)]
pub struct ChopArgs {
    /// Marker EDL exported from the editor [default: input.edl]
    #[arg(short, long, env = "CHOPPER_EDL")]
    pub edl: Option<PathBuf>,

    /// Rendered video to split [default: input.mov]
    #[arg(short, long, env = "CHOPPER_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory for the segment files [default: ./result/]
    #[arg(short, long, env = "CHOPPER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Frame rate of the timeline [default: 24]
    #[arg(long, env = "CHOPPER_FPS")]
    pub fps: Option<f64>,

    /// Show ffmpeg's banner and progress output; `--verbose=false` turns it off
    #[arg(
        short,
        long,
        env = "CHOPPER_VERBOSE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub verbose: Option<bool>,

    /// Overwrite existing segment files; `--overwrite=false` turns it off
    #[arg(
        long,
        env = "CHOPPER_OVERWRITE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub overwrite: Option<bool>,

    /// Cuts to run at once, 0 for one per CPU [default: 1]
    #[arg(short, long, env = "CHOPPER_JOBS")]
    pub jobs: Option<usize>,

    /// ffmpeg executable [default: ffmpeg]
    #[arg(long, env = "CHOPPER_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// Print the commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Marker EDL exported from the editor [default: input.edl]
    #[arg(short, long, env = "CHOPPER_EDL")]
    pub edl: Option<PathBuf>,

    /// Frame rate of the timeline [default: 24]
    #[arg(long, env = "CHOPPER_FPS")]
    pub fps: Option<f64>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
