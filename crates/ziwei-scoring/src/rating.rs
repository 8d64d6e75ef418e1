//! Star rating: a 1–5 level per position from its rank among all twelve.

use serde::Serialize;

/// Percentile bands, best first.
const PERCENTILE_BANDS: [(f64, u8); 4] = [(20.0, 5), (40.0, 4), (60.0, 3), (80.0, 2)];

/// Absolute thresholds used when there is no distribution to rank against.
const ABSOLUTE_BANDS: [(f64, u8); 4] = [(80.0, 5), (65.0, 4), (50.0, 3), (35.0, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarRating {
    /// Internal level, 1 (weakest) to 5 (strongest), after any cap.
    pub level: u8,
    /// Displayed stars: `2.0 + level × 0.5`.
    pub stars: f64,
    pub capped: bool,
}

/// Internal level of `score` among `all_scores`.
pub fn level_for(score: f64, all_scores: &[f64]) -> u8 {
    let ranked: Vec<f64> = all_scores.iter().copied().filter(|s| *s >= 0.0).collect();
    if ranked.len() >= 2 {
        let rank = ranked.iter().filter(|s| **s >= score).count().saturating_sub(1);
        let percentile = rank as f64 / (ranked.len() - 1) as f64 * 100.0;
        return PERCENTILE_BANDS
            .iter()
            .find(|(upper, _)| percentile < *upper)
            .map_or(1, |(_, level)| *level);
    }
    ABSOLUTE_BANDS
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map_or(1, |(_, level)| *level)
}

/// Rate `score`, applying a rating cap when one is set.
pub fn rate(score: f64, all_scores: &[f64], cap: Option<u8>) -> StarRating {
    let uncapped = level_for(score, all_scores);
    let level = cap.map_or(uncapped, |c| uncapped.min(c.max(1)));
    StarRating {
        level,
        stars: 2.0 + f64::from(level) * 0.5,
        capped: level < uncapped,
    }
}
