// Adapters - concrete implementations of the ports

pub mod exec_ffmpeg;

pub use exec_ffmpeg::{FfmpegTool, ToolPaths};
