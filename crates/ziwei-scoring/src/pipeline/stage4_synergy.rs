//! Stage 4: domain-synergy boost.
//!
//! Identity transform. Kept as a named stage so an element-based boost can
//! slot in without renumbering the pipeline.

use super::context::{ComputationContext, PositionScoreContext};

pub fn apply(_score: &mut PositionScoreContext<'_>, _ctx: &ComputationContext<'_>) {}
