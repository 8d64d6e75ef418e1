//! Layer injection and per-position detection.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};
use ziwei_core::config::OverlapConfig;
use ziwei_core::types::{ModifierType, Position};
use ziwei_core::NatalChart;

use super::record::{Classification, LayerTags, OverlapRecord, OverlapTag};
use crate::transform::TransformationSet;

/// Structured tag for a position in one of the headline classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonanceTag {
    pub position: Position,
    pub classification: Classification,
    /// e.g. `財帛: 本命太陽化忌 + 流年太陽化忌 → critical-risk`.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverlapSummary {
    pub volatile_count: usize,
    pub critical_risk_count: usize,
    pub max_opportunity_count: usize,
    pub volatile_positions: Vec<Position>,
    pub critical_risk_positions: Vec<Position>,
    pub max_opportunity_positions: Vec<Position>,
    pub tags: Vec<ResonanceTag>,
}

/// Overlap records for all twelve positions plus the derived summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapReport {
    pub records: BTreeMap<Position, OverlapRecord>,
    pub summary: OverlapSummary,
}

impl OverlapReport {
    pub fn record(&self, position: Position) -> Option<&OverlapRecord> {
        self.records.get(&position)
    }

    pub fn positions_with(&self, classification: Classification) -> Vec<Position> {
        self.records
            .values()
            .filter(|r| r.classification == classification)
            .map(|r| r.position)
            .collect()
    }
}

/// Inject every layer's modifiers into the positions hosting their targets,
/// then classify each position.
///
/// A target no position hosts is skipped; it does not affect other layers.
pub fn detect(
    chart: &NatalChart,
    transformations: &TransformationSet,
    config: &OverlapConfig,
) -> OverlapReport {
    let mut tags: BTreeMap<Position, LayerTags> =
        Position::ALL.iter().map(|p| (*p, LayerTags::default())).collect();

    for layer in transformations.layers() {
        let layer_weight = layer.kind.overlap_weight(config);
        let mut injected = 0usize;
        for (modifier, target) in &layer.modifiers {
            let Some(position) = chart.locate(target) else {
                debug!(layer = ?layer.kind, symbol = %target, "orphan transformation skipped");
                continue;
            };
            let tag = OverlapTag {
                modifier: *modifier,
                symbol: target.clone(),
                layer_weight,
            };
            if let Some(slot) = tags.get_mut(&position) {
                if slot.insert(layer.kind, tag) {
                    injected += 1;
                }
            }
        }
        debug!(layer = ?layer.kind, injected, "layer injected");
    }

    let records: BTreeMap<Position, OverlapRecord> = tags
        .into_iter()
        .map(|(position, tags)| (position, OverlapRecord::from_tags(position, tags)))
        .collect();
    let summary = summarize(&records);
    info!(
        volatile = summary.volatile_count,
        critical_risk = summary.critical_risk_count,
        max_opportunity = summary.max_opportunity_count,
        "overlap detection complete"
    );
    OverlapReport { records, summary }
}

fn summarize(records: &BTreeMap<Position, OverlapRecord>) -> OverlapSummary {
    let mut summary = OverlapSummary::default();
    for record in records.values() {
        let list = match record.classification {
            Classification::VolatileAmbivalence => &mut summary.volatile_positions,
            Classification::CriticalRisk => &mut summary.critical_risk_positions,
            Classification::MaxOpportunity => &mut summary.max_opportunity_positions,
            _ => continue,
        };
        list.push(record.position);
        summary.tags.push(ResonanceTag {
            position: record.position,
            classification: record.classification,
            description: headline(record),
        });
    }
    summary.volatile_count = summary.volatile_positions.len();
    summary.critical_risk_count = summary.critical_risk_positions.len();
    summary.max_opportunity_count = summary.max_opportunity_positions.len();
    summary
}

/// Lists the tags that drove the classification, adversity first.
fn headline(record: &OverlapRecord) -> String {
    let relevant: &[ModifierType] = match record.classification {
        Classification::VolatileAmbivalence => &[ModifierType::Adversity, ModifierType::Prosperity],
        Classification::CriticalRisk => &[ModifierType::Adversity],
        _ => &[ModifierType::Prosperity],
    };
    let parts: Vec<String> = relevant
        .iter()
        .flat_map(|modifier| {
            record
                .tags
                .iter()
                .filter(move |(_, tag)| tag.modifier == *modifier)
                .map(|(kind, tag)| format!("{}{}{}", kind.label(), tag.symbol, tag.modifier.label()))
        })
        .collect();
    format!(
        "{}: {} → {}",
        record.position.display_name(),
        parts.join(" + "),
        record.classification.as_str()
    )
}
