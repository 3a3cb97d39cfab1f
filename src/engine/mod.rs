//! Export engine
//!
//! Lossless extraction only: the engine drives the external tool's
//! stream-copy path and never decodes or re-encodes anything itself.

pub mod copy;

pub use copy::StreamCopyExporter;
