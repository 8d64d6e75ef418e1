//! # ziwei-core
//!
//! Foundation crate for the palace scoring engine.
//! Defines domain types, name canonicalization, chart ingestion, the symbol
//! weight catalog, config, errors, traits and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod chart;
pub mod config;
pub mod constants;
pub mod cyclic;
pub mod errors;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use catalog::{CatalogHit, PenaltyRule, SymbolWeightCatalog, SymbolWeightEntry};
pub use chart::{NatalChart, NatalChartBuilder, RawChart, SymbolList};
pub use config::EngineConfig;
pub use errors::{CatalogError, ChartError, ConfigError, ScoringError};
pub use traits::{FixedStrengthResolver, StrengthResolver};
pub use types::{
    Branch, ElementClass, Gender, ModifierType, Position, Stem, StrengthGrade, SymbolCategory,
    SymbolName,
};
