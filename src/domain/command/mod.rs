// Cut command construction - one lossless trim per segment

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::model::Segment;

/// Flags that silence everything but errors from the cut tool
const QUIET_ARGS: [&str; 3] = ["-hide_banner", "-loglevel", "error"];

/// Settings shared by every cut of one run
#[derive(Debug, Clone, PartialEq)]
pub struct CutSettings {
    /// Executable of the cut tool
    pub program: String,
    /// Source media file
    pub input: PathBuf,
    /// Directory receiving one file per segment
    pub output_dir: PathBuf,
    /// Let the cut tool print its banner and progress
    pub verbose: bool,
    /// Replace existing output files without asking
    pub overwrite: bool,
}

impl CutSettings {
    /// Output path for a segment: `<output_dir>/<name><input extension>`
    pub fn output_path(&self, segment_name: &str) -> PathBuf {
        let file_name = match self.input.extension() {
            Some(ext) => format!("{}.{}", segment_name, ext.to_string_lossy()),
            None => segment_name.to_string(),
        };
        self.output_dir.join(file_name)
    }
}

/// Fully resolved invocation of the cut tool for one segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutCommand {
    pub segment: Segment,
    pub program: String,
    pub args: Vec<String>,
    pub output: PathBuf,
}

impl CutCommand {
    /// Build the stream-copy trim of `segment` out of the configured input
    pub fn for_segment(segment: &Segment, settings: &CutSettings) -> Self {
        let output = settings.output_path(&segment.name);

        let mut args: Vec<String> = Vec::new();
        if !settings.verbose {
            args.extend(QUIET_ARGS.iter().map(|a| a.to_string()));
        }
        if settings.overwrite {
            args.push("-y".to_string());
        }
        args.extend([
            "-i".to_string(),
            path_arg(&settings.input),
            "-ss".to_string(),
            segment.start.to_string(),
            "-to".to_string(),
            segment.stop.to_string(),
            "-c".to_string(),
            "copy".to_string(),
            "-map".to_string(),
            "0".to_string(),
            path_arg(&output),
        ]);

        Self {
            segment: segment.clone(),
            program: settings.program.clone(),
            args,
            output,
        }
    }
}

impl fmt::Display for CutCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}
