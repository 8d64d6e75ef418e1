//! Stage 6: minor boost, deity penalties and special rules.

use tracing::debug;
use ziwei_core::types::{ModifierType, SymbolCategory};

use super::context::{ComputationContext, PositionScoreContext, SymbolContext};
use crate::transform::LayerKind;

/// Year the administrative-adversity rule is scoped to.
pub const ADMINISTRATIVE_RULE_YEAR: i64 = 2026;

/// Symbol whose adversity triggers the administrative rule.
pub const ADMINISTRATIVE_TARGET: &str = "廉貞";

const ADMINISTRATIVE_IDS: [&str; 2] = ["GuanFu", "ZhiBei"];
const ADMINISTRATIVE_TAG: &str = "行政風險";

/// Rating cap imposed by adversity pairing.
pub const ADVERSITY_PAIRING_CAP: u8 = 4;

pub fn apply(score: &mut PositionScoreContext<'_>, ctx: &ComputationContext<'_>) {
    let limit = ctx.config.scoring.minor_boost_limit;
    let minor_total: f64 = score
        .symbols
        .iter()
        .filter(|s| !s.category.rolls_into_base())
        .map(|s| s.running_score)
        .sum();
    score.minor_boost = minor_total.clamp(-limit, limit);

    let administrative_active = administrative_rule_active(score, ctx);
    let adversity_present = adversity_in_position(score, ctx);

    let deities: Vec<SymbolContext<'_>> = score
        .symbols
        .iter()
        .filter(|s| s.category == SymbolCategory::Deity)
        .cloned()
        .collect();

    for deity in deities {
        let Some(entry) = deity.entry else { continue };

        if let Some(rule) = &entry.penalty_rule {
            if rule.restricts(score.position) {
                score.penalty_applied += rule.penalty_amount.unwrap_or(0.0);
            }
            if let Some(cap) = rule.max_rating_cap {
                if rule.applies_to(score.position) {
                    score.tighten_cap(cap);
                }
            }
            if rule.requires_adversity_pairing && adversity_present {
                score.tighten_cap(ADVERSITY_PAIRING_CAP);
            }
        }

        if let Some(tag) = &entry.advisory_tag {
            score.advisory_tags.push(tag.clone());
        }

        let administrative = ADMINISTRATIVE_IDS.contains(&entry.id.as_str())
            || entry.advisory_tag.as_deref() == Some(ADMINISTRATIVE_TAG);
        if administrative_active && administrative {
            let extra = 2.0 * deity.running_score.abs();
            score.penalty_applied += extra;
            debug!(
                position = %score.position,
                deity = %deity.symbol,
                extra,
                "administrative adversity penalty"
            );
        }
    }
}

/// The annual or minor-limit layer puts adversity on 廉貞, 廉貞 is in this
/// position, and the evaluation targets the rule's year.
fn administrative_rule_active(score: &PositionScoreContext<'_>, ctx: &ComputationContext<'_>) -> bool {
    ctx.target_year == ADMINISTRATIVE_RULE_YEAR
        && score.hosts(ADMINISTRATIVE_TARGET)
        && [LayerKind::Annual, LayerKind::MinorLimit].iter().any(|kind| {
            ctx.transformations
                .get(*kind)
                .assigns(ModifierType::Adversity, ADMINISTRATIVE_TARGET)
        })
}

/// Any active layer's adversity target sits in this position.
fn adversity_in_position(score: &PositionScoreContext<'_>, ctx: &ComputationContext<'_>) -> bool {
    ctx.transformations.layers().iter().any(|layer| {
        layer
            .target(ModifierType::Adversity)
            .is_some_and(|target| score.hosts(target.as_str()))
    })
}
