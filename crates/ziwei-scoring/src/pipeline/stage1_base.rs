//! Stage 1: base score per symbol, from the catalog or the documented
//! defaults.

use ziwei_core::types::{SymbolCategory, SymbolName};

use super::context::{ComputationContext, SymbolContext, SymbolContexts};

/// Build symbol contexts with their base scores. When `base_only` is set,
/// only symbols that roll into the base total are kept.
pub fn build<'a>(
    symbols: &'a [SymbolName],
    ctx: &ComputationContext<'a>,
    base_only: bool,
) -> SymbolContexts<'a> {
    let scoring = &ctx.config.scoring;
    symbols
        .iter()
        .filter_map(|symbol| {
            let (category, entry) = ctx.catalog.classify(symbol);
            if base_only && !category.rolls_into_base() {
                return None;
            }
            let running_score = match entry {
                Some(row) => row.base_score,
                None if category == SymbolCategory::Major => scoring.default_major_base_score,
                None => scoring.default_base_score,
            };
            Some(SymbolContext {
                symbol,
                category,
                entry,
                grade: Default::default(),
                running_score,
                correction_factor: 1.0,
            })
        })
        .collect()
}
