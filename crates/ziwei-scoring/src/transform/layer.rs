//! Transformation layer records.

use std::collections::BTreeMap;

use serde::Serialize;
use ziwei_core::config::OverlapConfig;
use ziwei_core::types::{Branch, ModifierType, Position, Stem, SymbolName};

use super::table;

/// The four temporal scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Natal,
    Decadal,
    Annual,
    MinorLimit,
}

impl LayerKind {
    pub const ALL: [LayerKind; 4] = [Self::Natal, Self::Decadal, Self::Annual, Self::MinorLimit];

    pub fn label(self) -> &'static str {
        match self {
            Self::Natal => "本命",
            Self::Decadal => "大限",
            Self::Annual => "流年",
            Self::MinorLimit => "小限",
        }
    }

    /// Weight recorded on overlap tags contributed by this layer.
    pub fn overlap_weight(self, config: &OverlapConfig) -> f64 {
        match self {
            Self::Natal => config.natal_weight,
            Self::Decadal => config.decadal_weight,
            Self::Annual => config.annual_weight,
            Self::MinorLimit => config.minor_limit_weight,
        }
    }

    /// Temporal factor used when merging all layers into one weight map.
    pub fn temporal_factor(self) -> f64 {
        match self {
            Self::Natal => 1.0,
            Self::Decadal => 0.8,
            Self::Annual => 0.6,
            Self::MinorLimit => 0.4,
        }
    }
}

/// How a time-dependent layer's position was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerDetail {
    Decadal {
        span_index: u32,
        start_age: u32,
        end_age: u32,
        forward: bool,
    },
    MinorLimit {
        yearly_index: u32,
        forward: bool,
    },
}

/// One layer's stem, optional anchoring branch/position, and its modifier
/// assignments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformationLayer {
    pub kind: LayerKind,
    pub stem: Option<Stem>,
    pub branch: Option<Branch>,
    pub position: Option<Position>,
    pub modifiers: BTreeMap<ModifierType, SymbolName>,
    pub weights: BTreeMap<SymbolName, f64>,
    pub detail: Option<LayerDetail>,
}

impl TransformationLayer {
    /// A layer with nothing assigned.
    pub fn empty(kind: LayerKind) -> Self {
        Self {
            kind,
            stem: None,
            branch: None,
            position: None,
            modifiers: BTreeMap::new(),
            weights: BTreeMap::new(),
            detail: None,
        }
    }

    /// Assign modifiers from the stem table.
    pub fn from_stem(kind: LayerKind, stem: Stem) -> Self {
        let mut layer = Self::empty(kind);
        layer.stem = Some(stem);
        for (modifier, name) in table::assignments(stem) {
            let Some(symbol) = SymbolName::canonical(name) else {
                continue;
            };
            *layer.weights.entry(symbol.clone()).or_default() += modifier.canonical_weight();
            layer.modifiers.insert(modifier, symbol);
        }
        layer
    }

    pub fn with_branch(mut self, branch: Option<Branch>) -> Self {
        self.branch = branch;
        self
    }

    pub fn with_position(mut self, position: Option<Position>) -> Self {
        self.position = position;
        self
    }

    pub fn with_detail(mut self, detail: LayerDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn target(&self, modifier: ModifierType) -> Option<&SymbolName> {
        self.modifiers.get(&modifier)
    }

    /// Whether this layer puts `modifier` on `symbol`.
    pub fn assigns(&self, modifier: ModifierType, symbol: &str) -> bool {
        self.target(modifier).is_some_and(|s| s.as_str() == symbol)
    }
}

/// All four live layers for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformationSet {
    pub natal: TransformationLayer,
    pub decadal: TransformationLayer,
    pub annual: TransformationLayer,
    pub minor_limit: TransformationLayer,
}

impl TransformationSet {
    pub fn get(&self, kind: LayerKind) -> &TransformationLayer {
        match kind {
            LayerKind::Natal => &self.natal,
            LayerKind::Decadal => &self.decadal,
            LayerKind::Annual => &self.annual,
            LayerKind::MinorLimit => &self.minor_limit,
        }
    }

    pub fn layers(&self) -> [&TransformationLayer; 4] {
        [&self.natal, &self.decadal, &self.annual, &self.minor_limit]
    }

    /// Every symbol's signed weight summed across layers, each layer scaled
    /// by its temporal factor.
    pub fn combined_weights(&self) -> BTreeMap<SymbolName, f64> {
        let mut combined = BTreeMap::new();
        for layer in self.layers() {
            let factor = layer.kind.temporal_factor();
            for (symbol, weight) in &layer.weights {
                *combined.entry(symbol.clone()).or_insert(0.0) += weight * factor;
            }
        }
        combined
    }

    pub fn summary(&self) -> LayerSummary {
        LayerSummary {
            layers: self
                .layers()
                .map(|layer| LayerSummaryEntry {
                    kind: layer.kind,
                    stem: layer.stem,
                    branch: layer.branch,
                    position: layer.position,
                })
                .to_vec(),
        }
    }
}

/// Stems, branches and positions of the four layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSummary {
    pub layers: Vec<LayerSummaryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerSummaryEntry {
    pub kind: LayerKind,
    pub stem: Option<Stem>,
    pub branch: Option<Branch>,
    pub position: Option<Position>,
}
