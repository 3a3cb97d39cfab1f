//! Stream copy export implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ExportJob;
use crate::error::{FrameCutError, FrameCutResult};
use crate::ports::MediaToolPort;

/// Stream copy exporter for lossless cuts
pub struct StreamCopyExporter {
    tool: Arc<dyn MediaToolPort>,
}

impl StreamCopyExporter {
    pub fn new(tool: Arc<dyn MediaToolPort>) -> Self {
        Self { tool }
    }

    /// Execute one stream-copy extraction.
    ///
    /// Callers are expected to hand over an already validated job, but the
    /// range is re-checked defensively here. On failure the tool may leave a
    /// truncated file at the output path; it is never a silently valid one.
    pub async fn export(&self, job: &ExportJob) -> FrameCutResult<()> {
        self.validate_range(job)?;

        info!(
            source = %job.source_path.display(),
            output = %job.output_path.display(),
            start = job.start_time,
            duration = job.copy_duration(),
            "starting stream-copy export"
        );

        if let Err(e) = self.tool.extract(job).await {
            warn!(
                output = %job.output_path.display(),
                "export failed; output file may be absent or truncated"
            );
            return Err(e);
        }

        info!(output = %job.output_path.display(), "export complete");
        Ok(())
    }

    fn validate_range(&self, job: &ExportJob) -> FrameCutResult<()> {
        let valid = job.start_time.is_finite()
            && job.end_time.is_finite()
            && job.start_time >= 0.0
            && job.start_time <= job.end_time;

        if !valid {
            return Err(FrameCutError::InvalidRange {
                start: job.start_time,
                end: job.end_time,
                duration: job.end_time,
            });
        }

        Ok(())
    }
}
