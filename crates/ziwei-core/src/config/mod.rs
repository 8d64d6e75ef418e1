//! Configuration for the scoring engine.
//! TOML-based; compiled defaults, then file, then `ZIWEI_*` environment.

pub mod defaults;
pub mod engine_config;
pub mod overlap_config;
pub mod scoring_config;
pub mod spatial_config;
pub mod validation_config;

pub use engine_config::EngineConfig;
pub use overlap_config::OverlapConfig;
pub use scoring_config::ScoringConfig;
pub use spatial_config::{FocusConfig, SpatialConfig};
pub use validation_config::ValidationConfig;
