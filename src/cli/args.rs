//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the cut command
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Start time (HH:MM:SS.ms, MM:SS.ms, or seconds; default: file start)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (HH:MM:SS.ms, MM:SS.ms, or seconds; default: file end)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Frame rate used to snap start/end to frame boundaries
    /// (start rounds down, end rounds up; omit to cut at the raw times)
    #[arg(long)]
    pub fps: Option<f64>,

    /// Output file path (default: <stem>_cut_<N>.mp4 next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export without confirmation even when no start/end was given
    #[arg(short = 'y', long)]
    pub yes: bool,
}
