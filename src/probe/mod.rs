//! Media file probing
//!
//! Issues two queries against the external inspection tool through the
//! [`MediaToolPort`] boundary and parses the structured output into a
//! [`MediaInfo`]: one for the first video stream's dimensions, one for the
//! container duration.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::MediaInfo;
use crate::error::{FrameCutError, FrameCutResult};
use crate::ports::{MediaToolPort, ProbeQuery};

/// JSON shape of the stream query (`-show_entries stream=width,height,duration -of json`)
#[derive(Debug, Deserialize)]
struct StreamQueryOutput {
    #[serde(default)]
    streams: Vec<StreamEntry>,
}

#[derive(Debug, Deserialize)]
struct StreamEntry {
    width: Option<u32>,
    height: Option<u32>,
}

/// Media prober backed by an injected tool port
pub struct MediaProbe {
    tool: Arc<dyn MediaToolPort>,
}

impl MediaProbe {
    pub fn new(tool: Arc<dyn MediaToolPort>) -> Self {
        Self { tool }
    }

    /// Probe a media file for dimensions and duration.
    ///
    /// Either query failing, or either output failing to parse, fails the
    /// whole probe; nothing is retried.
    pub async fn probe(&self, file_path: &Path) -> FrameCutResult<MediaInfo> {
        if !file_path.exists() {
            return Err(FrameCutError::FileNotFound {
                path: file_path.to_path_buf(),
            });
        }

        let stream_json = self.tool.probe(file_path, ProbeQuery::VideoStream).await?;
        let (width, height) = parse_stream_dimensions(&stream_json)?;
        debug!(width, height, "probed video stream");

        let duration_text = self
            .tool
            .probe(file_path, ProbeQuery::ContainerDuration)
            .await?;
        let duration = parse_duration(&duration_text)?;
        debug!(duration, "probed container duration");

        MediaInfo::new(width, height, duration, file_path.to_path_buf())
    }
}

/// Parse the JSON stream query output into `(width, height)`.
///
/// Dimensions absent from the first stream entry default to zero, matching
/// the inspection tool's behavior for audio-only or metadata-less streams.
fn parse_stream_dimensions(json: &str) -> FrameCutResult<(u32, u32)> {
    let output: StreamQueryOutput =
        serde_json::from_str(json).map_err(|e| FrameCutError::MalformedProbeOutput {
            message: format!("stream query is not valid JSON: {e}"),
        })?;

    let first = output.streams.first();
    let width = first.and_then(|s| s.width).unwrap_or(0);
    let height = first.and_then(|s| s.height).unwrap_or(0);
    Ok((width, height))
}

/// Parse the bare numeric duration output
fn parse_duration(text: &str) -> FrameCutResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| FrameCutError::MalformedProbeOutput {
            message: format!("duration is not numeric: {:?}", text.trim()),
        })
}
