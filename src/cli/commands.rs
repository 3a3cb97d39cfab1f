//! Command execution

use std::sync::Arc;

use anyhow::{bail, ensure, Context, Result};
use tracing::info;

use crate::app::ClipSession;
use crate::cli::args::{CutArgs, InspectArgs};
use crate::planner::AlignMode;
use crate::ports::{FixedPosition, MediaToolPort};
use crate::utils::time::{format_time, parse_time};

/// Probe a file and print what the probe found
pub async fn execute_inspect(args: InspectArgs, tool: Arc<dyn MediaToolPort>) -> Result<()> {
    let session = ClipSession::load(tool, &args.input).await?;
    let media = session.media();

    if args.json {
        println!("{}", serde_json::to_string_pretty(media)?);
    } else {
        println!("File:       {}", media.source_path.display());
        println!("Dimensions: {}x{}", media.width, media.height);
        println!(
            "Duration:   {} ({:.3}s)",
            format_time(media.duration),
            media.duration
        );
    }

    Ok(())
}

/// Cut a sub-range out of a file via stream copy
pub async fn execute_cut(args: CutArgs, tool: Arc<dyn MediaToolPort>) -> Result<()> {
    let mut session = ClipSession::load(tool, &args.input).await?;

    let start = args
        .start
        .as_deref()
        .map(parse_time)
        .transpose()
        .context("invalid --start")?;
    let end = args
        .end
        .as_deref()
        .map(parse_time)
        .transpose()
        .context("invalid --end")?;

    match args.fps {
        Some(fps) => {
            // Planner precondition: alignment needs a positive frame rate
            ensure!(fps > 0.0, "--fps must be positive, got {fps}");

            if let Some(time) = start {
                let aligned =
                    session.mark_point(&FixedPosition { time, fps }, AlignMode::RoundToPrev);
                info!(raw = time, aligned, "start aligned to frame boundary");
            }
            if let Some(time) = end {
                let aligned =
                    session.mark_point(&FixedPosition { time, fps }, AlignMode::RoundToNext);
                info!(raw = time, aligned, "end aligned to frame boundary");
            }
        }
        None => {
            let range = session.range();
            session.set_marks(
                start.unwrap_or(range.start_time),
                end.unwrap_or(range.end_time),
            );
        }
    }

    if session.is_full_range() && !args.yes {
        bail!(
            "no cut points given; this would copy the whole file. \
             Pass --yes to export anyway"
        );
    }

    let range = session.range();
    let output = match args.output {
        Some(path) => {
            session.export_to(&path).await?;
            path
        }
        None => session.export().await?,
    };

    println!(
        "Exported {} - {} ({:.3}s) -> {}",
        format_time(range.start_time),
        format_time(range.end_time),
        range.span(),
        output.display()
    );

    Ok(())
}
