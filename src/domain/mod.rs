// Domain layer - EDL parsing, timecode conversion and cut planning

pub mod command;
pub mod edl;
pub mod errors;
pub mod model;
pub mod timecode;
