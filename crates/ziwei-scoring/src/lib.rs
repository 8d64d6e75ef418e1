//! # ziwei-scoring
//!
//! Palace scoring engine: four-layer transformation resolver, six-stage
//! per-position pipeline, spatial aggregation (self + opposite + trines),
//! focus amplification, star rating and overlap resonance detection.

pub mod engine;
pub mod focus;
pub mod overlap;
pub mod pipeline;
pub mod rating;
pub mod spatial;
pub mod transform;

pub use engine::{ChartEvaluation, EvaluationParams, PositionOutcome, ScoringEngine};
pub use overlap::{Classification, OverlapRecord, OverlapReport};
pub use pipeline::RawPositionScore;
pub use spatial::SpatialScore;
pub use transform::{LayerKind, TransformationLayer, TransformationResolver, TransformationSet};
