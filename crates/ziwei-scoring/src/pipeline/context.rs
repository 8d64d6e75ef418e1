//! Explicit computation state threaded through every stage.

use serde::Serialize;
use smallvec::SmallVec;
use ziwei_core::catalog::SymbolWeightEntry;
use ziwei_core::config::EngineConfig;
use ziwei_core::types::{Position, StrengthGrade, SymbolCategory, SymbolName};
use ziwei_core::{NatalChart, StrengthResolver, SymbolWeightCatalog};

use crate::transform::TransformationSet;

/// Read-only inputs shared by all twelve position runs.
#[derive(Clone, Copy)]
pub struct ComputationContext<'a> {
    pub chart: &'a NatalChart,
    pub catalog: &'a SymbolWeightCatalog,
    pub config: &'a EngineConfig,
    pub transformations: &'a TransformationSet,
    pub strength: &'a dyn StrengthResolver,
    pub target_year: i64,
}

/// Working state of one symbol inside a position.
#[derive(Debug, Clone)]
pub struct SymbolContext<'a> {
    pub symbol: &'a SymbolName,
    pub category: SymbolCategory,
    pub entry: Option<&'a SymbolWeightEntry>,
    pub grade: StrengthGrade,
    pub running_score: f64,
    /// Product of every multiplier applied so far.
    pub correction_factor: f64,
}

pub type SymbolContexts<'a> = SmallVec<[SymbolContext<'a>; 8]>;

/// Result of stages 1–3 over one symbol set.
#[derive(Debug, Clone)]
pub struct PartialScore<'a> {
    pub symbols: SymbolContexts<'a>,
    /// Sum of running scores of symbols that roll into the base total.
    pub subtotal: f64,
}

impl<'a> PartialScore<'a> {
    pub fn from_symbols(symbols: SymbolContexts<'a>) -> Self {
        let mut partial = Self {
            symbols,
            subtotal: 0.0,
        };
        partial.recompute_subtotal();
        partial
    }

    pub fn recompute_subtotal(&mut self) {
        self.subtotal = self
            .symbols
            .iter()
            .filter(|s| s.category.rolls_into_base())
            .map(|s| s.running_score)
            .sum();
    }
}

/// Per-position working state, discarded once the raw score is read.
#[derive(Debug, Clone)]
pub struct PositionScoreContext<'a> {
    pub position: Position,
    pub symbols: SymbolContexts<'a>,
    pub base_score: f64,
    pub borrowed_score: f64,
    pub transformation_boost: f64,
    pub double_convergence: bool,
    pub minor_boost: f64,
    pub penalty_applied: f64,
    pub max_rating_cap: Option<u8>,
    pub advisory_tags: Vec<String>,
}

impl<'a> PositionScoreContext<'a> {
    pub fn new(position: Position, own: PartialScore<'a>) -> Self {
        Self {
            position,
            base_score: own.subtotal,
            symbols: own.symbols,
            borrowed_score: 0.0,
            transformation_boost: 0.0,
            double_convergence: false,
            minor_boost: 0.0,
            penalty_applied: 0.0,
            max_rating_cap: None,
            advisory_tags: Vec::new(),
        }
    }

    pub fn has_major(&self) -> bool {
        self.symbols
            .iter()
            .any(|s| s.category == SymbolCategory::Major)
    }

    pub fn hosts(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s.symbol.as_str() == symbol)
    }

    /// Lower the rating cap to `cap` if it is tighter than the current one.
    pub fn tighten_cap(&mut self, cap: u8) {
        self.max_rating_cap = Some(self.max_rating_cap.map_or(cap, |c| c.min(cap)));
    }

    pub fn finish(self) -> RawPositionScore {
        let raw_score = (self.base_score + self.minor_boost - self.penalty_applied).max(0.0);
        RawPositionScore {
            position: self.position,
            base_score: self.base_score,
            borrowed_score: self.borrowed_score,
            transformation_boost: self.transformation_boost,
            double_convergence: self.double_convergence,
            minor_boost: self.minor_boost,
            penalty_applied: self.penalty_applied,
            max_rating_cap: self.max_rating_cap,
            advisory_tags: self.advisory_tags,
            raw_score,
        }
    }
}

/// Pipeline output for one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawPositionScore {
    pub position: Position,
    pub base_score: f64,
    pub borrowed_score: f64,
    pub transformation_boost: f64,
    pub double_convergence: bool,
    pub minor_boost: f64,
    pub penalty_applied: f64,
    pub max_rating_cap: Option<u8>,
    pub advisory_tags: Vec<String>,
    /// `max(0, base_score + minor_boost − penalty_applied)`.
    pub raw_score: f64,
}
