// Domain models - Core types and data structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FrameCutError, FrameCutResult};

/// Media file information, as reported by a successful probe.
///
/// Created once per probe, immutable afterwards. Discarded when the session
/// loads a new file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Width of the first video stream in pixels
    pub width: u32,
    /// Height of the first video stream in pixels
    pub height: u32,
    /// Container duration in seconds
    pub duration: f64,
    /// Path the probe was run against
    pub source_path: PathBuf,
}

impl MediaInfo {
    /// Create new media info with validation
    pub fn new(
        width: u32,
        height: u32,
        duration: f64,
        source_path: PathBuf,
    ) -> FrameCutResult<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(FrameCutError::MalformedProbeOutput {
                message: format!("duration must be a non-negative number, got {duration}"),
            });
        }

        Ok(Self {
            width,
            height,
            duration,
            source_path,
        })
    }
}

/// A user-marked cut range, in seconds.
///
/// Invariant: `0 <= start_time <= end_time <= duration` of the loaded file.
/// Defaults to the full file on load and after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutRange {
    pub start_time: f64,
    pub end_time: f64,
}

impl CutRange {
    /// Create a cut range, validating it against the media duration
    pub fn new(start_time: f64, end_time: f64, duration: f64) -> FrameCutResult<Self> {
        let valid = start_time.is_finite()
            && end_time.is_finite()
            && start_time >= 0.0
            && start_time <= end_time
            && end_time <= duration;

        if !valid {
            return Err(FrameCutError::InvalidRange {
                start: start_time,
                end: end_time,
                duration,
            });
        }

        Ok(Self {
            start_time,
            end_time,
        })
    }

    /// The range covering the whole file, `(0, duration)`
    pub fn full(duration: f64) -> Self {
        Self {
            start_time: 0.0,
            end_time: duration,
        }
    }

    /// Whether this range still covers the whole file, i.e. the user never
    /// marked a point. Callers use this to ask for confirmation before a
    /// full-length export.
    pub fn is_full(&self, duration: f64) -> bool {
        self.start_time == 0.0 && self.end_time == duration
    }

    /// Length of the range in seconds
    pub fn span(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Everything the export engine needs for one stream-copy extraction.
///
/// Constructed immediately before the export call; not persisted.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub source_path: PathBuf,
    pub start_time: f64,
    pub end_time: f64,
    pub output_path: PathBuf,
}

impl ExportJob {
    pub fn new(
        source_path: impl Into<PathBuf>,
        range: CutRange,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            start_time: range.start_time,
            end_time: range.end_time,
            output_path: output_path.into(),
        }
    }

    /// Copy-duration passed to the export tool (`-t`)
    pub fn copy_duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn source(&self) -> &Path {
        &self.source_path
    }
}

#[cfg(test)]
mod tests;
