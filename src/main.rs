//! FrameCut CLI
//!
//! Frame-aligned lossless video cutting via ffmpeg stream copy.
//!
//! # Usage
//!
//! ```bash
//! framecut inspect --input video.mp4
//! framecut cut --input video.mp4 --start 1.016 --end 2.001 --fps 30
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use framecut::adapters::{FfmpegTool, ToolPaths};
use framecut::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Tool locations are resolved once here and read-only afterwards
    let tool = Arc::new(FfmpegTool::new(ToolPaths {
        ffmpeg: cli.ffmpeg,
        ffprobe: cli.ffprobe,
    }));

    match cli.command {
        Commands::Inspect(args) => {
            debug!("executing inspect command");
            commands::execute_inspect(args, tool).await?;
        }
        Commands::Cut(args) => {
            debug!("executing cut command");
            commands::execute_cut(args, tool).await?;
        }
    }

    Ok(())
}
