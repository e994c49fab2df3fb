//! Error handling module for EDL Chopper

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for EDL Chopper operations
#[derive(Error, Debug)]
pub enum ChopperError {
    /// EDL parsing or segment building failed
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// EDL file not found or inaccessible
    #[error("EDL file not found: {path}")]
    EdlNotFound { path: String },

    /// Source media file not found
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Configuration file or value error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Segment name that cannot be used as an output file name
    #[error("Segment name '{name}' cannot be used as a file name: {reason}")]
    InvalidSegmentName { name: String, reason: String },

    /// Cut tool could not be started
    #[error("Failed to run {program}: {message}")]
    ExecutionError { program: String, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for EDL Chopper operations
pub type ChopperResult<T> = std::result::Result<T, ChopperError>;
