//! Error handling for the scoring engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod chart_error;
pub mod config_error;
pub mod error_code;
pub mod scoring_error;

pub use catalog_error::CatalogError;
pub use chart_error::ChartError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use scoring_error::ScoringError;
