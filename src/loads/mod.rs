//! Load types and load assemblies

mod assembly;
mod load_instance;
mod series;

pub use assembly::{LoadAssembly, LoadAssemblyBuilder};
pub use load_instance::LoadInstance;
pub use series::{LoadSegment, LoadSegmentSeries, DEGENERATE_SEGMENT_TOLERANCE};
