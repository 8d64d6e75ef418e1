//! Stage 2: strength-grade multiplier.

use ziwei_core::types::Position;

use super::context::{ComputationContext, PartialScore};

pub fn apply(partial: &mut PartialScore<'_>, position: Position, ctx: &ComputationContext<'_>) {
    for symbol in partial.symbols.iter_mut() {
        symbol.grade = ctx.strength.resolve(symbol.symbol, position, ctx.chart);
        let multiplier = symbol
            .entry
            .map_or(1.0, |e| e.strength_multiplier(symbol.grade));
        symbol.running_score *= multiplier;
        symbol.correction_factor *= multiplier;
    }
    partial.recompute_subtotal();
}
