// Application layer - Use case interactors

pub mod chop_interactor;
pub mod container;

// Re-export interactors
pub use chop_interactor::{ChopInteractor, ChopPlan, ChopReport, ChopRequest};
pub use container::{AppContainer, DefaultAppContainer};
