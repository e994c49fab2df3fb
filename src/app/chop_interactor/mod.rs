// Chop interactor - Orchestrates the EDL-to-segments use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::command::{CutCommand, CutSettings};
use crate::domain::edl;
use crate::domain::model::{FrameRate, Segment};
use crate::error::{ChopperError, ChopperResult};
use crate::ports::*;
use crate::utils::path::PathUtils;

/// Everything needed to chop one input file
#[derive(Debug, Clone)]
pub struct ChopRequest {
    pub edl_path: PathBuf,
    pub frame_rate: FrameRate,
    pub settings: CutSettings,
    /// Maximum number of cuts running at once
    pub jobs: usize,
}

/// Segments and the commands that will cut them, built before anything runs
#[derive(Debug, Clone, Serialize)]
pub struct ChopPlan {
    pub segments: Vec<Segment>,
    pub commands: Vec<CutCommand>,
}

/// Outcome of every cut, in timeline order
#[derive(Debug, Clone, Serialize)]
pub struct ChopReport {
    pub outcomes: Vec<CutOutcome>,
}

impl ChopReport {
    pub fn failures(&self) -> impl Iterator<Item = &CutOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// Interactor for the chop use case
pub struct ChopInteractor {
    execute_port: Arc<dyn ExecutePort>,
}

impl ChopInteractor {
    /// Create new chop interactor with injected port
    pub fn new(execute_port: Arc<dyn ExecutePort>) -> Self {
        Self { execute_port }
    }

    /// Read an EDL file and build its segments
    pub async fn load_segments(
        edl_path: &Path,
        frame_rate: FrameRate,
    ) -> ChopperResult<Vec<Segment>> {
        let content = tokio::fs::read_to_string(edl_path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ChopperError::EdlNotFound {
                    path: edl_path.display().to_string(),
                },
                _ => ChopperError::IoError(e),
            })?;

        debug!("Read {} bytes from {}", content.len(), edl_path.display());
        let segments = edl::build_segments(content.lines(), frame_rate)?;
        info!(
            "Built {} segments from {} at {}",
            segments.len(),
            edl_path.display(),
            frame_rate
        );
        Ok(segments)
    }

    /// Build the cut command of every segment.
    ///
    /// All names are checked before any command exists, so a bad name
    /// aborts the run before the first file is written.
    pub fn plan(segments: Vec<Segment>, settings: &CutSettings) -> ChopperResult<ChopPlan> {
        for segment in &segments {
            PathUtils::validate_segment_name(&segment.name)?;
        }

        for name in PathUtils::duplicate_names(segments.iter().map(|s| s.name.as_str())) {
            warn!(
                "Segment name '{}' occurs more than once; later cuts target the same file",
                name
            );
        }

        let commands = segments
            .iter()
            .map(|segment| CutCommand::for_segment(segment, settings))
            .collect();

        Ok(ChopPlan { segments, commands })
    }

    /// Load and plan the request without running anything
    pub async fn prepare(&self, request: &ChopRequest) -> ChopperResult<ChopPlan> {
        let segments = Self::load_segments(&request.edl_path, request.frame_rate).await?;
        Self::plan(segments, &request.settings)
    }

    /// Run every command of a prepared plan
    pub async fn run(&self, plan: &ChopPlan, request: &ChopRequest) -> ChopperResult<ChopReport> {
        let settings = &request.settings;

        if self.execute_port.is_dry_run() {
            if !settings.input.exists() {
                warn!("Input file does not exist: {}", settings.input.display());
            }
        } else {
            if !settings.input.exists() {
                return Err(ChopperError::InputFileNotFound {
                    path: settings.input.display().to_string(),
                });
            }
            if !settings.output_dir.as_os_str().is_empty() && !settings.output_dir.is_dir() {
                info!("Creating output directory: {}", settings.output_dir.display());
                tokio::fs::create_dir_all(&settings.output_dir).await?;
            }
        }

        let jobs = request.jobs.max(1);
        let outcomes = if jobs == 1 || plan.commands.len() < 2 {
            self.run_sequentially(&plan.commands).await?
        } else {
            self.run_concurrently(&plan.commands, jobs).await?
        };

        let report = ChopReport { outcomes };
        let failed = report.failures().count();
        if failed > 0 {
            warn!("{} of {} cuts reported a failure", failed, report.outcomes.len());
        } else {
            info!("Finished {} cuts", report.outcomes.len());
        }
        Ok(report)
    }

    /// Load, plan and run the request
    pub async fn execute(&self, request: &ChopRequest) -> ChopperResult<ChopReport> {
        let plan = self.prepare(request).await?;
        self.run(&plan, request).await
    }

    async fn run_sequentially(&self, commands: &[CutCommand]) -> ChopperResult<Vec<CutOutcome>> {
        let mut outcomes = Vec::with_capacity(commands.len());
        for command in commands {
            outcomes.push(self.execute_port.execute(command).await?);
        }
        Ok(outcomes)
    }

    async fn run_concurrently(
        &self,
        commands: &[CutCommand],
        jobs: usize,
    ) -> ChopperResult<Vec<CutOutcome>> {
        debug!("Running {} cuts with up to {} jobs", commands.len(), jobs);

        let semaphore = Arc::new(Semaphore::new(jobs));
        let mut tasks = JoinSet::new();

        for (index, command) in commands.iter().cloned().enumerate() {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| ChopperError::ExecutionError {
                    program: command.program.clone(),
                    message: e.to_string(),
                })?;
            let port = Arc::clone(&self.execute_port);
            tasks.spawn(async move {
                let _permit = permit;
                (index, port.execute(&command).await)
            });
        }

        let mut outcomes: Vec<Option<CutOutcome>> = vec![None; commands.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| ChopperError::ExecutionError {
                program: "cut task".to_string(),
                message: e.to_string(),
            })?;
            outcomes[index] = Some(result?);
        }

        Ok(outcomes.into_iter().flatten().collect())
    }
}
