//! ScoringEngine: runs one full chart evaluation.
//!
//! Resolver → per-position pipeline → spatial barrier → focus → rating,
//! with overlap detection alongside. Each call is independent; nothing is
//! cached between evaluations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};
use ziwei_core::config::EngineConfig;
use ziwei_core::constants::POSITION_COUNT;
use ziwei_core::errors::ScoringError;
use ziwei_core::types::{Gender, Position, SymbolName};
use ziwei_core::{
    FixedStrengthResolver, NatalChart, RawChart, StrengthResolver, SymbolWeightCatalog,
};

use crate::focus::{self, FocusedScore};
use crate::overlap::{self, OverlapReport};
use crate::pipeline::{self, ComputationContext, RawPositionScore};
use crate::rating::{self, StarRating};
use crate::spatial::{self, SpatialScore};
use crate::transform::{self, LayerSummary, TransformationSet};

/// Per-request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationParams {
    pub age: i64,
    pub gender: Gender,
    pub target_year: i64,
}

/// Final per-position output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionOutcome {
    pub position: Position,
    pub normalized_score: f64,
    pub amplified_score: f64,
    pub is_focus_position: bool,
    pub advisory_tags: Vec<String>,
    pub max_rating_cap: Option<u8>,
    pub rating: StarRating,
}

/// Everything one evaluation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEvaluation {
    pub params: EvaluationParams,
    pub transformations: TransformationSet,
    pub layer_summary: LayerSummary,
    pub combined_weights: BTreeMap<SymbolName, f64>,
    pub raw_scores: Vec<RawPositionScore>,
    pub spatial_scores: Vec<SpatialScore>,
    pub focus_position: Option<Position>,
    pub positions: Vec<PositionOutcome>,
    pub overlap: OverlapReport,
}

impl ChartEvaluation {
    pub fn outcome(&self, position: Position) -> &PositionOutcome {
        &self.positions[position.ring_index()]
    }
}

/// Scoring engine bound to one catalog and configuration.
pub struct ScoringEngine {
    catalog: SymbolWeightCatalog,
    config: EngineConfig,
    strength: Box<dyn StrengthResolver>,
}

impl ScoringEngine {
    /// Create an engine. The configuration is validated once here.
    pub fn new(catalog: SymbolWeightCatalog, config: EngineConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            strength: Box::new(FixedStrengthResolver::default()),
        })
    }

    /// Replace the strength resolver.
    pub fn with_strength_resolver(mut self, resolver: Box<dyn StrengthResolver>) -> Self {
        self.strength = resolver;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SymbolWeightCatalog {
        &self.catalog
    }

    /// Reject out-of-range ages before any computation starts.
    pub fn validate_params(&self, params: &EvaluationParams) -> Result<(), ScoringError> {
        let validation = &self.config.validation;
        if !validation.accepts_age(params.age) {
            return Err(ScoringError::InvalidAge {
                age: params.age,
                min: validation.min_age,
                max: validation.max_age,
            });
        }
        Ok(())
    }

    /// Canonicalize a provider chart, then evaluate it.
    pub fn evaluate_raw(
        &self,
        raw: RawChart,
        params: &EvaluationParams,
    ) -> Result<ChartEvaluation, ScoringError> {
        self.validate_params(params)?;
        let chart = NatalChart::from_raw(raw)?;
        self.evaluate(&chart, params)
    }

    /// Evaluate a canonical chart.
    pub fn evaluate(
        &self,
        chart: &NatalChart,
        params: &EvaluationParams,
    ) -> Result<ChartEvaluation, ScoringError> {
        let span = info_span!(
            "ziwei.evaluate",
            age = params.age,
            gender = %params.gender,
            target_year = params.target_year
        );
        let _guard = span.enter();

        self.validate_params(params)?;

        let transformations =
            transform::resolve_all(chart, params.age, params.gender, params.target_year);
        let focus_position = transformations.minor_limit.position;

        let ctx = ComputationContext {
            chart,
            catalog: &self.catalog,
            config: &self.config,
            transformations: &transformations,
            strength: self.strength.as_ref(),
            target_year: params.target_year,
        };
        let raw_scores = pipeline::run_pipeline(&ctx);

        let mut raw = [0.0; POSITION_COUNT];
        for score in &raw_scores {
            raw[score.position.ring_index()] = score.raw_score;
        }
        let spatial_scores = spatial::aggregate(&raw, &self.config.spatial);
        let focused = focus::amplify(&spatial_scores, focus_position, &self.config.focus);
        let positions = outcomes(&raw_scores, &focused);

        let overlap = overlap::detect(chart, &transformations, &self.config.overlap);

        info!(
            focus = ?focus_position,
            decadal = ?transformations.decadal.position,
            annual = ?transformations.annual.position,
            "evaluation complete"
        );

        Ok(ChartEvaluation {
            params: *params,
            layer_summary: transformations.summary(),
            combined_weights: transformations.combined_weights(),
            transformations,
            raw_scores,
            spatial_scores,
            focus_position,
            positions,
            overlap,
        })
    }
}

fn outcomes(raw_scores: &[RawPositionScore], focused: &[FocusedScore]) -> Vec<PositionOutcome> {
    let all: Vec<f64> = focused.iter().map(|f| f.amplified_score).collect();
    raw_scores
        .iter()
        .zip(focused)
        .map(|(raw, focus)| PositionOutcome {
            position: focus.position,
            normalized_score: focus.normalized_score,
            amplified_score: focus.amplified_score,
            is_focus_position: focus.is_focus_position,
            advisory_tags: raw.advisory_tags.clone(),
            max_rating_cap: raw.max_rating_cap,
            rating: rating::rate(focus.amplified_score, &all, raw.max_rating_cap),
        })
        .collect()
}
