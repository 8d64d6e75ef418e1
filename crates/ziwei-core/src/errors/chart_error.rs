//! Structural chart errors.

use super::error_code::{self, ErrorCode};

/// Problems that make a chart unusable. Anything softer (an unparseable stem,
/// a symbol the catalog has never seen) degrades instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("unknown position name: {name}")]
    UnknownPosition { name: String },

    #[error("chart has {found} of 12 positions, missing: {}", missing.join(", "))]
    IncompletePositions { found: usize, missing: Vec<String> },

    #[error("position {position} appears more than once")]
    DuplicatePosition { position: String },

    #[error("invalid chart field {field}: {message}")]
    InvalidField { field: String, message: String },
}

impl ErrorCode for ChartError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::IncompletePositions { .. } => error_code::CHART_INCOMPLETE,
            _ => error_code::CHART_INVALID,
        }
    }
}
