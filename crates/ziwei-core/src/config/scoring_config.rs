use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-position pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Base score for an uncatalogued major symbol.
    pub default_major_base_score: f64,
    /// Base score for any other uncatalogued symbol.
    pub default_base_score: f64,
    /// Share of the opposite position's subtotal borrowed by a position
    /// without a major symbol.
    pub borrow_ratio: f64,
    /// Symmetric clamp on the minor/deity boost.
    pub minor_boost_limit: f64,
    pub double_convergence_bonus: f64,
    /// Score the twelve positions on the rayon pool.
    pub parallel: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_major_base_score: defaults::DEFAULT_MAJOR_BASE_SCORE,
            default_base_score: defaults::DEFAULT_BASE_SCORE,
            borrow_ratio: defaults::DEFAULT_BORROW_RATIO,
            minor_boost_limit: defaults::DEFAULT_MINOR_BOOST_LIMIT,
            double_convergence_bonus: defaults::DEFAULT_DOUBLE_CONVERGENCE_BONUS,
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}
