//! 6-stage per-position scoring pipeline.
//!
//! Stage 1: Base Score → Stage 2: Strength → Stage 3: Resonance →
//! Stage 4: Synergy → Stage 5: Transformation → Stage 6: Penalty
//!
//! Stages 1–3 live in [`score_symbol_set`], which runs once over a
//! position's own symbols and, for a position without a major symbol, once
//! more over the opposite position's major and assistant symbols.

pub mod context;
pub mod stage1_base;
pub mod stage2_strength;
pub mod stage3_resonance;
pub mod stage4_synergy;
pub mod stage5_transform;
pub mod stage6_penalty;

use rayon::prelude::*;
use tracing::debug;
use ziwei_core::types::{Position, SymbolName};

pub use context::{ComputationContext, PartialScore, PositionScoreContext, RawPositionScore};

/// Run stages 1–3 over `symbols` as if they sat in `position`.
pub fn score_symbol_set<'a>(
    symbols: &'a [SymbolName],
    position: Position,
    ctx: &ComputationContext<'a>,
    base_only: bool,
) -> PartialScore<'a> {
    let mut partial = PartialScore::from_symbols(stage1_base::build(symbols, ctx, base_only));
    stage2_strength::apply(&mut partial, position, ctx);
    stage3_resonance::apply(&mut partial, position);
    partial
}

/// Score one position through all six stages.
pub fn score_position(position: Position, ctx: &ComputationContext<'_>) -> RawPositionScore {
    let own = score_symbol_set(ctx.chart.symbols(position), position, ctx, false);
    let mut score = PositionScoreContext::new(position, own);

    if !score.has_major() {
        let opposite = position.opposite();
        let borrowed = score_symbol_set(ctx.chart.symbols(opposite), opposite, ctx, true);
        score.borrowed_score = borrowed.subtotal * ctx.config.scoring.borrow_ratio;
        score.base_score += score.borrowed_score;
        debug!(
            position = %position,
            opposite = %opposite,
            borrowed = score.borrowed_score,
            "no major symbol, borrowing from opposite"
        );
    }

    stage4_synergy::apply(&mut score, ctx);
    stage5_transform::apply(&mut score, ctx);
    stage6_penalty::apply(&mut score, ctx);
    score.finish()
}

/// Score all twelve positions, in ring order.
///
/// Positions are independent, so with `scoring.parallel` set they run on the
/// rayon pool; collection preserves ring order either way.
pub fn run_pipeline(ctx: &ComputationContext<'_>) -> Vec<RawPositionScore> {
    if ctx.config.scoring.parallel {
        Position::ALL
            .par_iter()
            .map(|position| score_position(*position, ctx))
            .collect()
    } else {
        Position::ALL
            .iter()
            .map(|position| score_position(*position, ctx))
            .collect()
    }
}
