use serde::{Deserialize, Serialize};

use super::defaults;

/// Blend weights for a position and its three related positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    pub self_weight: f64,
    pub opposite_weight: f64,
    /// Applied to each of the two trine positions.
    pub trine_weight: f64,
    /// Blended score that normalizes to 100.
    pub ceiling: f64,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            self_weight: defaults::DEFAULT_SELF_WEIGHT,
            opposite_weight: defaults::DEFAULT_OPPOSITE_WEIGHT,
            trine_weight: defaults::DEFAULT_TRINE_WEIGHT,
            ceiling: defaults::DEFAULT_SPATIAL_CEILING,
        }
    }
}

/// Focus amplification of the minor-limit position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub amplification: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            amplification: defaults::DEFAULT_FOCUS_AMPLIFICATION,
        }
    }
}
