//! EDL Chopper Library
//!
//! Turns the timeline-marker EDL exported by a video editor into named
//! time ranges and cuts each range out of a rendered file with a lossless
//! ffmpeg stream copy.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::command::{CutCommand, CutSettings};
pub use domain::edl::{build_segments, parse_markers, segments_from_markers};
pub use domain::errors::DomainError;
pub use domain::model::{FrameRate, Marker, Segment, Timestamp};
pub use domain::timecode::convert;
pub use error::{ChopperError, ChopperResult};
