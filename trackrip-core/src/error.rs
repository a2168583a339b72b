//! Error types shared across the trackrip core library.

use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for trackrip
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ffprobe failed to launch or exited with a failure status.
    #[error("Failed to probe container: {0}")]
    ProbeExecution(String),

    /// ffprobe ran but its output was not the expected JSON document.
    #[error("Failed to parse ffprobe output: {0}")]
    ProbeParse(String),

    /// ffmpeg could not be started for a stream copy.
    #[error("Failed to start ffmpeg: {0}")]
    ExtractStart(String),

    /// ffmpeg ran but exited with a non-zero status. The status is
    /// surfaced verbatim; no attempt is made to interpret it.
    #[error("ffmpeg exited with {0}")]
    ExtractExit(ExitStatus),

    /// Extraction request rejected before any process was spawned.
    #[error("Invalid extraction request: {0}")]
    InvalidRequest(String),

    #[error("No processable video files found in the input directory")]
    NoFilesFound,

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("External dependency not found: {0}")]
    DependencyNotFound(String),
}

/// Result type for trackrip core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Creates a `ProbeExecution` error with the given message.
pub fn probe_execution_error(msg: impl Into<String>) -> CoreError {
    CoreError::ProbeExecution(msg.into())
}

/// Creates a `ProbeParse` error with the given message.
pub fn probe_parse_error(msg: impl Into<String>) -> CoreError {
    CoreError::ProbeParse(msg.into())
}

/// Creates an `ExtractStart` error with the given message.
pub fn extract_start_error(msg: impl Into<String>) -> CoreError {
    CoreError::ExtractStart(msg.into())
}

/// Creates an `InvalidRequest` error with the given message.
pub fn invalid_request_error(msg: impl Into<String>) -> CoreError {
    CoreError::InvalidRequest(msg.into())
}
