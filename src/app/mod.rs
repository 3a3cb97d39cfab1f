//! Application layer - one loaded video session
//!
//! A [`ClipSession`] owns the probed [`MediaInfo`] and the user's marks for
//! exactly one loaded file. UI or CLI callers hold the session and drive it;
//! all alignment and export logic lives here and below, never in the caller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::domain::{CutRange, ExportJob, MediaInfo};
use crate::engine::StreamCopyExporter;
use crate::error::FrameCutResult;
use crate::output::generate_output_path;
use crate::planner::{AlignMode, CutPlanner};
use crate::ports::{MediaToolPort, PlaybackPosition};
use crate::probe::MediaProbe;

/// Session state for one loaded video.
///
/// Constructed by a successful probe; loading another file means building a
/// new session. Probe and export both run blocking subprocesses under the
/// hood, so callers drive these futures off any interactive thread.
pub struct ClipSession {
    tool: Arc<dyn MediaToolPort>,
    media: MediaInfo,
    range: CutRange,
}

impl ClipSession {
    /// Probe `path` and open a session on it.
    ///
    /// Marks default to the full file. A probe failure yields no session,
    /// so playback and export can never proceed on an unprobed file.
    pub async fn load(tool: Arc<dyn MediaToolPort>, path: &Path) -> FrameCutResult<Self> {
        let media = MediaProbe::new(Arc::clone(&tool)).probe(path).await?;
        info!(
            file = %path.display(),
            width = media.width,
            height = media.height,
            duration = media.duration,
            "video loaded"
        );

        let range = CutRange::full(media.duration);
        Ok(Self { tool, media, range })
    }

    pub fn media(&self) -> &MediaInfo {
        &self.media
    }

    /// Current marks. May be transiently reversed if the user marked the end
    /// before the start; export validates before running.
    pub fn range(&self) -> CutRange {
        self.range
    }

    /// Mark a cut point at the decoder's current position.
    ///
    /// `RoundToPrev` sets the start mark, `RoundToNext` the end mark, and
    /// the frame-aligned timestamp is returned so callers can show the user
    /// where the mark actually landed.
    pub fn mark_point(&mut self, position: &dyn PlaybackPosition, mode: AlignMode) -> f64 {
        let raw = position.current_time_seconds();
        let aligned = CutPlanner::align_position(position, mode, self.media.duration);

        match mode {
            AlignMode::RoundToPrev => self.range.start_time = aligned,
            AlignMode::RoundToNext => self.range.end_time = aligned,
        }

        info!(raw, aligned, ?mode, "cut point marked");
        aligned
    }

    /// Set marks directly, for callers that already hold exact timestamps
    /// instead of a playhead. No alignment is applied; export still
    /// validates the range.
    pub fn set_marks(&mut self, start_time: f64, end_time: f64) {
        self.range.start_time = start_time;
        self.range.end_time = end_time;
    }

    /// Reset the marks back to the full file and return the new range
    pub fn reset_marks(&mut self) -> CutRange {
        self.range = CutRange::full(self.media.duration);
        self.range
    }

    /// Whether the marks still cover the whole file. Callers use this to
    /// confirm with the user before exporting an un-marked session.
    pub fn is_full_range(&self) -> bool {
        self.range.is_full(self.media.duration)
    }

    /// Export the marked range to an auto-numbered sibling of the source.
    ///
    /// The range is validated against the media duration first; failure of
    /// either validation or the tool leaves the marks untouched so the user
    /// can retry without re-marking.
    pub async fn export(&self) -> FrameCutResult<PathBuf> {
        let output = generate_output_path(&self.media.source_path)?;
        self.export_to(&output).await?;
        Ok(output)
    }

    /// Export the marked range to an explicit output path
    pub async fn export_to(&self, output: &Path) -> FrameCutResult<()> {
        let range = CutRange::new(
            self.range.start_time,
            self.range.end_time,
            self.media.duration,
        )?;

        let job = ExportJob::new(&self.media.source_path, range, output);
        StreamCopyExporter::new(Arc::clone(&self.tool))
            .export(&job)
            .await
    }
}
