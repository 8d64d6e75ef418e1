//! OverlapResonanceDetector: cross-references the four layers against the
//! twelve positions.

pub mod detector;
pub mod record;

pub use detector::{detect, OverlapReport, OverlapSummary, ResonanceTag};
pub use record::{Classification, LayerTags, OverlapRecord, OverlapTag};
