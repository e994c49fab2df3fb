// Ports - Interface definitions (contracts)

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::command::CutCommand;
use crate::error::ChopperResult;

/// Port for running cut commands against the source media
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Run one cut and report how the tool exited.
    ///
    /// An `Err` means the tool could not be started at all; a tool that ran
    /// and failed is reported through [`CutOutcome::exit_code`].
    async fn execute(&self, command: &CutCommand) -> ChopperResult<CutOutcome>;

    /// Whether the adapter runs the tool or only reports what it would run
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Result of one cut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutOutcome {
    pub segment: String,
    pub command_line: String,
    /// Exit code of the tool, `None` when it was not run or was killed
    pub exit_code: Option<i32>,
    pub executed: bool,
}

impl CutOutcome {
    pub fn succeeded(&self) -> bool {
        !self.executed || self.exit_code == Some(0)
    }
}
