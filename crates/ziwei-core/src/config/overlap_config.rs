use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-layer weights recorded on overlap tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    pub natal_weight: f64,
    pub decadal_weight: f64,
    pub annual_weight: f64,
    pub minor_limit_weight: f64,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            natal_weight: defaults::DEFAULT_NATAL_WEIGHT,
            decadal_weight: defaults::DEFAULT_DECADAL_WEIGHT,
            annual_weight: defaults::DEFAULT_ANNUAL_WEIGHT,
            minor_limit_weight: defaults::DEFAULT_MINOR_LIMIT_WEIGHT,
        }
    }
}

impl OverlapConfig {
    pub fn weights(&self) -> [(&'static str, f64); 4] {
        [
            ("overlap.natal_weight", self.natal_weight),
            ("overlap.decadal_weight", self.decadal_weight),
            ("overlap.annual_weight", self.annual_weight),
            ("overlap.minor_limit_weight", self.minor_limit_weight),
        ]
    }
}
