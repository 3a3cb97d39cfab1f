//! FrameCut lossless video cutting library
//!
//! Probes video files through an external inspection tool, snaps user-chosen
//! cut points to frame boundaries, and exports sub-ranges via stream copy
//! (no re-encoding). The external toolkit sits behind an injectable port so
//! the core stays testable without any binaries installed.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod planner;
pub mod ports;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use app::ClipSession;
pub use domain::{CutRange, ExportJob, MediaInfo};
pub use error::{FrameCutError, FrameCutResult};
pub use planner::{AlignMode, CutPlanner};
pub use ports::{MediaToolPort, PlaybackPosition, ProbeQuery};
