use std::sync::Arc;

use crate::adapters::{DryRunAdapter, FFmpegAdapter};
use crate::app::chop_interactor::ChopInteractor;
use crate::ports::ExecutePort;

pub trait AppContainer: Send + Sync {
    fn chop_interactor(&self) -> Arc<ChopInteractor>;
}

pub struct DefaultAppContainer {
    chop_interactor: Arc<ChopInteractor>,
}

impl DefaultAppContainer {
    /// Wire the interactor to ffmpeg, or to the dry-run recorder
    pub fn new(dry_run: bool) -> Self {
        let execute_port: Arc<dyn ExecutePort> = if dry_run {
            Arc::new(DryRunAdapter::new())
        } else {
            Arc::new(FFmpegAdapter::new())
        };

        Self::with_execute_port(execute_port)
    }

    pub fn with_execute_port(execute_port: Arc<dyn ExecutePort>) -> Self {
        Self {
            chop_interactor: Arc::new(ChopInteractor::new(execute_port)),
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn chop_interactor(&self) -> Arc<ChopInteractor> {
        Arc::clone(&self.chop_interactor)
    }
}
