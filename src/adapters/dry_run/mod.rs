// Dry-run adapter - reports cut commands without running them

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use crate::domain::command::CutCommand;
use crate::error::ChopperResult;
use crate::ports::*;

/// Execution adapter that records each command line instead of running it
#[derive(Default)]
pub struct DryRunAdapter {
    issued: Mutex<Vec<String>>,
}

impl DryRunAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command lines seen so far, in the order they were issued
    pub fn issued(&self) -> Vec<String> {
        match self.issued.lock() {
            Ok(issued) => issued.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ExecutePort for DryRunAdapter {
    async fn execute(&self, command: &CutCommand) -> ChopperResult<CutOutcome> {
        let command_line = command.to_string();
        info!(segment = %command.segment.name, "Dry run: {}", command_line);

        match self.issued.lock() {
            Ok(mut issued) => issued.push(command_line.clone()),
            Err(poisoned) => poisoned.into_inner().push(command_line.clone()),
        }

        Ok(CutOutcome {
            segment: command.segment.name.clone(),
            command_line,
            exit_code: None,
            executed: false,
        })
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
