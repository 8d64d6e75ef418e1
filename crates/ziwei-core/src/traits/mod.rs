//! Pluggable capabilities consumed by the scoring pipeline.

pub mod strength_resolver;

pub use strength_resolver::{FixedStrengthResolver, StrengthResolver};
