//! Static symbol weight catalog.
//!
//! Loaded once and shared read-only across evaluations. Entries are indexed
//! by the canonical form of both their `id` and display `name`, so a chart
//! spelling `ZiWei`, `紫微` or `紫薇` hits the same row.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CatalogError;
use crate::types::{Position, StrengthGrade, SymbolCategory, SymbolName};

/// Special rules a deity-category symbol may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PenaltyRule {
    /// Positions where `penalty_amount` applies. `None` means the rule has no
    /// positional restriction.
    #[serde(alias = "palaces")]
    pub restricted_positions: Option<Vec<Position>>,
    #[serde(alias = "penalty")]
    pub penalty_amount: Option<f64>,
    /// Upper bound on the 1–5 rating level of the hosting position.
    #[serde(alias = "maxStarRating")]
    pub max_rating_cap: Option<u8>,
    /// Cap the rating at 4 when an adversity modifier also lands here.
    pub requires_adversity_pairing: bool,
}

impl PenaltyRule {
    /// Whether the rule's positional restriction admits `position`.
    pub fn applies_to(&self, position: Position) -> bool {
        self.restricted_positions
            .as_ref()
            .map_or(true, |positions| positions.contains(&position))
    }

    /// Whether `position` is explicitly listed as restricted.
    pub fn restricts(&self, position: Position) -> bool {
        self.restricted_positions
            .as_ref()
            .is_some_and(|positions| positions.contains(&position))
    }
}

/// One catalog row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolWeightEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default, alias = "brightnessMultiplier")]
    pub strength_multiplier: BTreeMap<StrengthGrade, f64>,
    #[serde(default, alias = "resonanceMap")]
    pub position_resonance: BTreeMap<Position, f64>,
    #[serde(default, alias = "penaltyTrigger")]
    pub penalty_rule: Option<PenaltyRule>,
    #[serde(default, alias = "strategicTag")]
    pub advisory_tag: Option<String>,
}

impl SymbolWeightEntry {
    /// Multiplier for `grade`, 1.0 when the row has none.
    pub fn strength_multiplier(&self, grade: StrengthGrade) -> f64 {
        self.strength_multiplier.get(&grade).copied().unwrap_or(1.0)
    }

    /// Resonance multiplier for `position`, 1.0 when the row has none.
    pub fn resonance(&self, position: Position) -> f64 {
        self.position_resonance
            .get(&position)
            .copied()
            .unwrap_or(1.0)
    }
}

/// A successful catalog lookup.
#[derive(Debug, Clone, Copy)]
pub struct CatalogHit<'a> {
    pub category: SymbolCategory,
    pub entry: &'a SymbolWeightEntry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CatalogFile {
    #[serde(alias = "mainStars")]
    major_symbols: Vec<SymbolWeightEntry>,
    #[serde(alias = "assistantStars")]
    assistant_symbols: Vec<SymbolWeightEntry>,
    #[serde(alias = "minorStars")]
    minor_symbols: Vec<SymbolWeightEntry>,
    #[serde(alias = "deities")]
    deity_symbols: Vec<SymbolWeightEntry>,
}

/// Lookup priority when one key matches rows in several lists.
const CATEGORY_ORDER: [SymbolCategory; 4] = [
    SymbolCategory::Major,
    SymbolCategory::Assistant,
    SymbolCategory::Minor,
    SymbolCategory::Deity,
];

/// The symbol weight catalog with its lookup index.
#[derive(Debug, Default, Deserialize)]
#[serde(try_from = "CatalogFile")]
pub struct SymbolWeightCatalog {
    lists: [Vec<SymbolWeightEntry>; 4],
    index: FxHashMap<SymbolName, (SymbolCategory, usize)>,
}

impl TryFrom<CatalogFile> for SymbolWeightCatalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        Self::from_lists([
            file.major_symbols,
            file.assistant_symbols,
            file.minor_symbols,
            file.deity_symbols,
        ])
    }
}

impl SymbolWeightCatalog {
    /// A catalog with no rows. Every lookup misses and the pipeline falls
    /// back to its documented defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
                message: e.to_string(),
            })?;
        Self::try_from(file)
    }

    /// Build from the four lists in major, assistant, minor, deity order.
    pub fn from_lists(lists: [Vec<SymbolWeightEntry>; 4]) -> Result<Self, CatalogError> {
        let mut ids: FxHashMap<&str, SymbolCategory> = FxHashMap::default();
        let mut index = FxHashMap::default();

        for (category, entries) in CATEGORY_ORDER.iter().zip(lists.iter()) {
            for (row, entry) in entries.iter().enumerate() {
                if let Some(first) = ids.insert(entry.id.as_str(), *category) {
                    return Err(CatalogError::DuplicateSymbol {
                        symbol: entry.id.clone(),
                        first: format!("{first:?}"),
                        second: format!("{category:?}"),
                    });
                }
                let keys = std::iter::once(entry.id.as_str()).chain(entry.name.as_deref());
                for key in keys.filter_map(SymbolName::canonical) {
                    index.entry(key).or_insert((*category, row));
                }
            }
        }

        debug!(
            rows = lists.iter().map(Vec::len).sum::<usize>(),
            keys = index.len(),
            "symbol catalog indexed"
        );
        Ok(Self { lists, index })
    }

    pub fn lookup(&self, symbol: &SymbolName) -> Option<CatalogHit<'_>> {
        let (category, row) = *self.index.get(symbol)?;
        let list = &self.lists[CATEGORY_ORDER.iter().position(|c| *c == category)?];
        Some(CatalogHit {
            category,
            entry: list.get(row)?,
        })
    }

    /// Effective category plus the catalog row, if any. Category comes from
    /// catalog membership, then the symbol's intrinsic category, then `Minor`.
    pub fn classify(&self, symbol: &SymbolName) -> (SymbolCategory, Option<&SymbolWeightEntry>) {
        match self.lookup(symbol) {
            Some(hit) => (hit.category, Some(hit.entry)),
            None => (symbol.intrinsic_category().unwrap_or(SymbolCategory::Minor), None),
        }
    }

    pub fn category_of(&self, symbol: &SymbolName) -> SymbolCategory {
        self.classify(symbol).0
    }

    pub fn entries(&self, category: SymbolCategory) -> &[SymbolWeightEntry] {
        CATEGORY_ORDER
            .iter()
            .position(|c| *c == category)
            .map_or(&[][..], |i| self.lists[i].as_slice())
    }

    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
