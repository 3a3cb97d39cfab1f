// Domain layer - core value types and validation rules

pub mod model;

pub use model::{CutRange, ExportJob, MediaInfo};
