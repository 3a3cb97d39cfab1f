//! CLI module for FrameCut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// FrameCut - frame-aligned lossless video cutting
///
/// Probes video files and extracts sub-ranges via ffmpeg stream copy, with
/// cut points snapped to frame boundaries. No re-encoding ever happens.
#[derive(Parser)]
#[command(name = "framecut")]
#[command(about = "Frame-aligned lossless video cutting via ffmpeg stream copy")]
#[command(version)]
pub struct Cli {
    /// Path to the ffmpeg executable
    #[arg(long, env = "FRAMECUT_FFMPEG", default_value = "ffmpeg", global = true)]
    pub ffmpeg: PathBuf,

    /// Path to the ffprobe executable
    #[arg(long, env = "FRAMECUT_FFPROBE", default_value = "ffprobe", global = true)]
    pub ffprobe: PathBuf,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Probe a video file and print its dimensions and duration
    Inspect(args::InspectArgs),
    /// Export a sub-range of a video file without re-encoding
    Cut(args::CutArgs),
}
