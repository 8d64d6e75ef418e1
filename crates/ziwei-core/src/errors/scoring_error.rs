//! Errors surfaced by engine entry points.

use super::error_code::{self, ErrorCode};
use super::{CatalogError, ChartError, ConfigError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("age {age} is outside the supported range {min}..={max}")]
    InvalidAge { age: i64, min: u32, max: u32 },

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAge { .. } => error_code::INVALID_AGE,
            Self::Chart(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
