//! SpatialAggregator: blends each position with its opposite and trine
//! positions into a normalized 0–100 score.
//!
//! Needs all twelve raw scores at once; the fixed-size input makes that
//! barrier part of the signature.

use serde::Serialize;
use ziwei_core::config::SpatialConfig;
use ziwei_core::constants::POSITION_COUNT;
use ziwei_core::types::Position;

/// Blended score of one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpatialScore {
    pub position: Position,
    pub raw_self: f64,
    pub raw_opposite: f64,
    pub raw_trine1: f64,
    pub raw_trine2: f64,
    /// Weighted sum before normalization.
    pub blended: f64,
    /// `blended / ceiling × 100`, clamped to [0, 100], one decimal.
    pub normalized_score: f64,
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregate twelve raw scores given in ring order.
pub fn aggregate(raw: &[f64; POSITION_COUNT], config: &SpatialConfig) -> Vec<SpatialScore> {
    let score_at = |p: Position| raw[p.ring_index()];
    Position::ALL
        .iter()
        .map(|&position| {
            let [trine1, trine2] = position.trines();
            let raw_self = score_at(position);
            let raw_opposite = score_at(position.opposite());
            let raw_trine1 = score_at(trine1);
            let raw_trine2 = score_at(trine2);
            let blended = raw_self * config.self_weight
                + raw_opposite * config.opposite_weight
                + (raw_trine1 + raw_trine2) * config.trine_weight;
            let normalized = if config.ceiling > 0.0 {
                (blended / config.ceiling * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            SpatialScore {
                position,
                raw_self,
                raw_opposite,
                raw_trine1,
                raw_trine2,
                blended,
                normalized_score: round1(normalized),
            }
        })
        .collect()
}
