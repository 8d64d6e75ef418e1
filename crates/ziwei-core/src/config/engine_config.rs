//! Top-level engine configuration.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FocusConfig, OverlapConfig, ScoringConfig, SpatialConfig, ValidationConfig};
use crate::errors::ConfigError;

/// Aggregates every engine sub-config.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ZIWEI_*`)
/// 2. TOML file passed to [`EngineConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub spatial: SpatialConfig,
    pub focus: FocusConfig,
    pub overlap: OverlapConfig,
    pub validation: ValidationConfig,
}

impl EngineConfig {
    /// Load a TOML file, apply `ZIWEI_*` overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: EngineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        debug!(path = %path.display(), "engine config loaded");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `ZIWEI_*` overrides read through `lookup`. A present but
    /// unparseable value is rejected rather than ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        override_with(&lookup, "ZIWEI_SCORING_PARALLEL", &mut self.scoring.parallel)?;
        override_with(&lookup, "ZIWEI_SCORING_BORROW_RATIO", &mut self.scoring.borrow_ratio)?;
        override_with(
            &lookup,
            "ZIWEI_SCORING_MINOR_BOOST_LIMIT",
            &mut self.scoring.minor_boost_limit,
        )?;
        override_with(&lookup, "ZIWEI_SPATIAL_CEILING", &mut self.spatial.ceiling)?;
        override_with(&lookup, "ZIWEI_FOCUS_AMPLIFICATION", &mut self.focus.amplification)?;
        override_with(&lookup, "ZIWEI_VALIDATION_MIN_AGE", &mut self.validation.min_age)?;
        override_with(&lookup, "ZIWEI_VALIDATION_MAX_AGE", &mut self.validation.max_age)?;
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spatial.ceiling > 0.0) {
            return Err(invalid("spatial.ceiling", "must be greater than 0"));
        }
        let weights = [
            ("spatial.self_weight", self.spatial.self_weight),
            ("spatial.opposite_weight", self.spatial.opposite_weight),
            ("spatial.trine_weight", self.spatial.trine_weight),
        ];
        for (field, weight) in weights.into_iter().chain(self.overlap.weights()) {
            if !(weight >= 0.0) {
                return Err(invalid(field, "must be non-negative"));
            }
        }
        if !(self.focus.amplification >= 1.0) {
            return Err(invalid("focus.amplification", "must be at least 1.0"));
        }
        if !(0.0..=1.0).contains(&self.scoring.borrow_ratio) {
            return Err(invalid("scoring.borrow_ratio", "must be between 0.0 and 1.0"));
        }
        if !(self.scoring.minor_boost_limit >= 0.0) {
            return Err(invalid("scoring.minor_boost_limit", "must be non-negative"));
        }
        if self.validation.min_age < 1 {
            return Err(invalid("validation.min_age", "must be at least 1"));
        }
        if self.validation.max_age < self.validation.min_age {
            return Err(invalid(
                "validation.max_age",
                "must not be less than validation.min_age",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn override_with<F, T>(lookup: &F, key: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        *target = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            field: key.to_string(),
            message: format!("cannot parse {raw:?}"),
        })?;
    }
    Ok(())
}
