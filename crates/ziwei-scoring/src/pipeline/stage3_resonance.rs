//! Stage 3: position resonance multiplier.

use ziwei_core::types::Position;

use super::context::PartialScore;

pub fn apply(partial: &mut PartialScore<'_>, position: Position) {
    for symbol in partial.symbols.iter_mut() {
        let resonance = symbol.entry.map_or(1.0, |e| e.resonance(position));
        symbol.running_score *= resonance;
        symbol.correction_factor *= resonance;
    }
    partial.recompute_subtotal();
}
