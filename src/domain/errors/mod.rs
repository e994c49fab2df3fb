// Domain errors - Error types for the EDL core

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Structural problem in the EDL text: missing header, odd record
    /// count, or a record line without the expected fields
    Format(String),
    /// Timecode field that does not have the `MM:SS:FF` shape
    Parse(String),
    /// Fewer than two markers, so no segment can be built
    EmptyInput(usize),
    /// Invalid arguments provided
    BadArgs(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Format(msg) => write!(f, "Malformed EDL: {}", msg),
            DomainError::Parse(msg) => write!(f, "Invalid timecode: {}", msg),
            DomainError::EmptyInput(count) => write!(
                f,
                "EDL holds {} marker(s); at least 2 are needed to form a segment",
                count
            ),
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
