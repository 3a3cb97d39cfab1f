//! FFmpeg/FFprobe subprocess adapter
//!
//! The only place in the crate that actually executes binaries. Both tools
//! run with captured output and, on Windows, without spawning a console
//! window.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::ExportJob;
use crate::error::{FrameCutError, FrameCutResult};
use crate::ports::{MediaToolPort, ProbeQuery};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Executable locations for the external toolkit.
///
/// Resolved once at startup and read-only afterwards. The defaults rely on
/// PATH lookup.
#[derive(Debug, Clone)]
pub struct ToolPaths {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
        }
    }
}

/// Media tool port backed by ffmpeg/ffprobe subprocesses
pub struct FfmpegTool {
    paths: ToolPaths,
}

impl FfmpegTool {
    pub fn new(paths: ToolPaths) -> Self {
        Self { paths }
    }

    fn command(&self, program: &Path) -> Command {
        let mut cmd = Command::new(program);
        #[cfg(windows)]
        cmd.creation_flags(CREATE_NO_WINDOW);
        cmd
    }
}

#[async_trait]
impl MediaToolPort for FfmpegTool {
    async fn probe(&self, file_path: &Path, query: ProbeQuery) -> FrameCutResult<String> {
        let mut cmd = self.command(&self.paths.ffprobe);
        cmd.arg("-v").arg("error");

        match query {
            ProbeQuery::VideoStream => {
                cmd.arg("-select_streams")
                    .arg("v:0")
                    .arg("-show_entries")
                    .arg("stream=width,height,duration")
                    .arg("-of")
                    .arg("json");
            }
            ProbeQuery::ContainerDuration => {
                cmd.arg("-show_entries")
                    .arg("format=duration")
                    .arg("-of")
                    .arg("default=noprint_wrappers=1:nokey=1");
            }
        }
        cmd.arg(file_path);

        debug!(?query, file = %file_path.display(), "running ffprobe");
        let output = cmd.output().await?;

        if !output.status.success() {
            return Err(FrameCutError::ProbeToolFailed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn extract(&self, job: &ExportJob) -> FrameCutResult<()> {
        let mut cmd = self.command(&self.paths.ffmpeg);
        cmd.arg("-ss")
            .arg(format!("{:.6}", job.start_time))
            .arg("-i")
            .arg(&job.source_path)
            .arg("-t")
            .arg(format!("{:.6}", job.copy_duration()))
            .arg("-c")
            .arg("copy")
            .arg("-y")
            .arg(&job.output_path);

        debug!(
            source = %job.source_path.display(),
            output = %job.output_path.display(),
            "running ffmpeg stream copy"
        );
        let output = cmd.output().await?;

        if !output.status.success() {
            return Err(FrameCutError::ExportToolFailed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
