//! FocusAmplifier: lifts the minor-limit position.

use serde::Serialize;
use ziwei_core::config::FocusConfig;
use ziwei_core::types::Position;

use crate::spatial::{round1, SpatialScore};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusedScore {
    pub position: Position,
    pub normalized_score: f64,
    pub amplified_score: f64,
    pub is_focus_position: bool,
}

/// Amplify the score of `focus`, leaving every other position unchanged.
/// Never decreases a score while `amplification >= 1`.
pub fn amplify(
    spatial: &[SpatialScore],
    focus: Option<Position>,
    config: &FocusConfig,
) -> Vec<FocusedScore> {
    spatial
        .iter()
        .map(|s| {
            let is_focus_position = focus == Some(s.position);
            let amplified_score = if is_focus_position {
                round1((s.normalized_score * config.amplification).min(100.0))
                    .max(s.normalized_score)
            } else {
                s.normalized_score
            };
            FocusedScore {
                position: s.position,
                normalized_score: s.normalized_score,
                amplified_score,
                is_focus_position,
            }
        })
        .collect()
}
