//! Stage 5: transformation adjustment.
//!
//! Each active layer adds its modifier's signed weight when the target symbol
//! sits in the position. Double convergence is a named special case: two or
//! more prosperity hits, counting 祿存 presence as one, earn a flat bonus.

use tracing::trace;
use ziwei_core::types::ModifierType;

use super::context::{ComputationContext, PositionScoreContext};

/// Symbol that always counts as one prosperity hit.
pub const PROSPERITY_STAR: &str = "祿存";

pub fn apply(score: &mut PositionScoreContext<'_>, ctx: &ComputationContext<'_>) {
    let mut boost = 0.0;
    let mut prosperity_hits = 0u32;

    for layer in ctx.transformations.layers() {
        for (modifier, target) in &layer.modifiers {
            if !score.hosts(target.as_str()) {
                continue;
            }
            boost += modifier.canonical_weight();
            if *modifier == ModifierType::Prosperity {
                prosperity_hits += 1;
            }
            trace!(
                position = %score.position,
                layer = ?layer.kind,
                modifier = %modifier,
                symbol = %target,
                "transformation hit"
            );
        }
    }

    if score.hosts(PROSPERITY_STAR) {
        prosperity_hits += 1;
    }
    if prosperity_hits >= 2 {
        boost += ctx.config.scoring.double_convergence_bonus;
        score.double_convergence = true;
    }

    score.transformation_boost = boost;
    score.base_score += boost;
}
