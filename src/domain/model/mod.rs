// Domain models - Core types and data structures

use std::fmt;

use serde::Serialize;

use crate::domain::errors::DomainError;

/// Frame rate of the source media, in frames per second
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrameRate(f64);

impl FrameRate {
    /// Frame rate used when none is configured
    pub const DEFAULT_FPS: f64 = 24.0;

    /// Create a new frame rate with validation
    pub fn new(fps: f64) -> Result<Self, DomainError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(DomainError::BadArgs(format!(
                "Frame rate must be a positive number, got {}",
                fps
            )));
        }
        Ok(Self(fps))
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self(Self::DEFAULT_FPS)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.0)
    }
}

/// Converted position on the timeline, rendered as `MM:SS.cc`.
///
/// Only the timecode converter constructs these, so every value has the
/// shape ffmpeg accepts for `-ss` and `-to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub(crate) fn from_parts(first: &str, second: &str, fraction: &str) -> Self {
        Self(format!("{}:{}.{}", first, second, fraction))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Marker whose metadata line has been read but whose name line has not
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMarker {
    start: Timestamp,
}

impl PendingMarker {
    pub fn new(start: Timestamp) -> Self {
        Self { start }
    }

    pub fn start(&self) -> &Timestamp {
        &self.start
    }

    /// Attach the name read from the following line, completing the marker
    pub fn named(self, name: impl Into<String>) -> Result<Marker, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Format("Marker name cannot be empty".to_string()));
        }
        Ok(Marker {
            start: self.start,
            name,
        })
    }
}

/// Named split point on the source timeline
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    start: Timestamp,
    name: String,
}

impl Marker {
    pub fn start(&self) -> &Timestamp {
        &self.start
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Interval between a marker and the start of its successor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub name: String,
    pub start: Timestamp,
    pub stop: Timestamp,
}

impl Segment {
    /// Close `marker` at the start of the marker that follows it.
    ///
    /// No ordering check is made: out-of-order markers yield an inverted
    /// interval, exactly as they appear in the EDL.
    pub fn between(marker: &Marker, next: &Marker) -> Self {
        Self {
            name: marker.name.clone(),
            start: marker.start.clone(),
            stop: next.start.clone(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}-{}", self.name, self.start, self.stop)
    }
}

#[cfg(test)]
mod tests;
