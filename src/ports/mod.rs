// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::ExportJob;
use crate::error::FrameCutResult;

/// What a probe invocation should ask the inspection tool for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeQuery {
    /// First video stream's `width,height,duration`, as JSON
    VideoStream,
    /// Container `format=duration`, as a bare numeric string
    ContainerDuration,
}

/// Port for the external media toolkit.
///
/// The core never executes binaries directly; it goes through this boundary
/// so tests can substitute a fake tool returning canned output.
#[async_trait]
pub trait MediaToolPort: Send + Sync {
    /// Run one probe query against `file_path` and return the tool's stdout.
    ///
    /// A non-zero exit code surfaces as `ProbeToolFailed` with the captured
    /// stderr; parsing of the returned text is the caller's job.
    async fn probe(&self, file_path: &Path, query: ProbeQuery) -> FrameCutResult<String>;

    /// Perform one stream-copy extraction.
    ///
    /// Seeks to `job.start_time`, copies `job.copy_duration()` seconds of all
    /// streams without re-encoding, overwriting `job.output_path` if present.
    async fn extract(&self, job: &ExportJob) -> FrameCutResult<()>;
}

/// Read-only view of where the external decoder currently is.
///
/// Owned by the playback collaborator; the core only reads from it when a
/// mark point is requested. Implementations must only be handed to the core
/// while a decoder is open, so `frames_per_second` is positive.
pub trait PlaybackPosition {
    /// Current playback position in seconds
    fn current_time_seconds(&self) -> f64;

    /// Frame rate of the open decoder
    fn frames_per_second(&self) -> f64;
}

/// Fixed position for non-interactive callers such as the CLI, where the
/// "playhead" is just a user-supplied timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    pub time: f64,
    pub fps: f64,
}

impl PlaybackPosition for FixedPosition {
    fn current_time_seconds(&self) -> f64 {
        self.time
    }

    fn frames_per_second(&self) -> f64 {
        self.fps
    }
}
