use serde::{Deserialize, Serialize};

use super::defaults;

/// Boundary checks applied before the pipeline starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_age: u32,
    pub max_age: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_age: defaults::DEFAULT_MIN_AGE,
            max_age: defaults::DEFAULT_MAX_AGE,
        }
    }
}

impl ValidationConfig {
    pub fn accepts_age(&self, age: i64) -> bool {
        (i64::from(self.min_age)..=i64::from(self.max_age)).contains(&age)
    }
}
