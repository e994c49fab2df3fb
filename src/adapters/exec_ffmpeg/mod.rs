//! FFmpeg execution adapter
//!
//! Runs each cut as a child `ffmpeg` process with the terminal attached, so
//! error output and overwrite prompts reach the user directly. A child is
//! killed if its cut is dropped before it exits.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::command::CutCommand;
use crate::error::{ChopperError, ChopperResult};
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter;

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for FFmpegAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    async fn execute(&self, command: &CutCommand) -> ChopperResult<CutOutcome> {
        let command_line = command.to_string();
        debug!("Running: {}", command_line);

        let status = Command::new(&command.program)
            .args(&command.args)
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| ChopperError::ExecutionError {
                program: command.program.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            warn!(
                segment = %command.segment.name,
                "{} exited with {}",
                command.program,
                status
            );
        }

        Ok(CutOutcome {
            segment: command.segment.name.clone(),
            command_line,
            exit_code: status.code(),
            executed: true,
        })
    }
}
