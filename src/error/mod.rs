//! Error handling module for FrameCut

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for FrameCut operations
#[derive(Error, Debug)]
pub enum FrameCutError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The probe tool exited non-zero
    #[error("Probe tool failed: {stderr}")]
    ProbeToolFailed { stderr: String },

    /// The probe tool produced output we could not parse
    #[error("Malformed probe output: {message}")]
    MalformedProbeOutput { message: String },

    /// The export tool exited non-zero
    #[error("Export tool failed: {stderr}")]
    ExportToolFailed { stderr: String },

    /// Cut range validation error
    #[error("Invalid cut range: start {start:.3}s, end {end:.3}s, duration {duration:.3}s")]
    InvalidRange {
        start: f64,
        end: f64,
        duration: f64,
    },

    /// Invalid time format on the CLI surface
    #[error("Invalid time format: {time}. Expected HH:MM:SS.ms, MM:SS.ms, or seconds")]
    InvalidTimeFormat { time: String },

    /// Output path could not be derived from the source path
    #[error("Cannot derive output path from source: {}", path.display())]
    InvalidSourcePath { path: PathBuf },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for FrameCut operations
pub type FrameCutResult<T> = std::result::Result<T, FrameCutError>;
