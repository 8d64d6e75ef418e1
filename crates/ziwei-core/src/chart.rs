//! Natal chart ingestion.
//!
//! [`RawChart`] mirrors what the chart provider emits: loose strings in
//! whatever script the provider happens to use. [`NatalChart::from_raw`]
//! canonicalizes it once; nothing downstream compares raw strings again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::constants::POSITION_COUNT;
use crate::errors::ChartError;
use crate::types::{Branch, ElementClass, Position, Stem, SymbolName};

/// Symbols hosted by one position. Charts rarely exceed eight per position.
pub type SymbolList = SmallVec<[SymbolName; 8]>;

/// Chart exactly as the provider serializes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawChart {
    #[serde(alias = "minggongBranch")]
    pub soul_position_branch: Option<String>,
    #[serde(alias = "shengongBranch")]
    pub body_position_branch: Option<String>,
    #[serde(alias = "wuxingju")]
    pub element_class: Option<String>,
    pub year_stem: Option<String>,
    pub year_branch: Option<String>,
    #[serde(alias = "mainStars")]
    pub positions: BTreeMap<String, Vec<String>>,
}

impl RawChart {
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        serde_json::from_str(json).map_err(|e| ChartError::InvalidField {
            field: "chart".to_string(),
            message: e.to_string(),
        })
    }
}

/// Canonical, immutable chart shared read-only by every scoring stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalChart {
    soul_branch: Option<Branch>,
    body_branch: Option<Branch>,
    element_class: Option<ElementClass>,
    year_stem: Option<Stem>,
    year_branch: Option<Branch>,
    #[serde(serialize_with = "serialize_positions")]
    positions: [SymbolList; POSITION_COUNT],
}

fn serialize_positions<S: serde::Serializer>(
    positions: &[SymbolList; POSITION_COUNT],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(POSITION_COUNT))?;
    for (position, symbols) in Position::ALL.iter().zip(positions.iter()) {
        map.serialize_entry(position, symbols.as_slice())?;
    }
    map.end()
}

impl NatalChart {
    pub fn builder() -> NatalChartBuilder {
        NatalChartBuilder::default()
    }

    /// Canonicalize a provider chart.
    ///
    /// Fails only on structural problems: an unrecognized position name, a
    /// position given twice with conflicting symbols, or fewer than twelve
    /// positions. Unparseable stems, branches and element classes become
    /// `None` and later degrade to empty transformation layers.
    pub fn from_raw(raw: RawChart) -> Result<Self, ChartError> {
        let mut seen: [Option<SymbolList>; POSITION_COUNT] = Default::default();

        for (name, raw_symbols) in &raw.positions {
            let position = Position::from_name(name)
                .ok_or_else(|| ChartError::UnknownPosition { name: name.clone() })?;
            let symbols = canonical_symbols(raw_symbols);
            let slot = &mut seen[position.ring_index()];
            match slot.take() {
                None => *slot = Some(symbols),
                Some(existing) if existing.is_empty() => *slot = Some(symbols),
                Some(existing) if symbols.is_empty() || existing == symbols => {
                    *slot = Some(existing)
                }
                Some(_) => {
                    return Err(ChartError::DuplicatePosition {
                        position: position.to_string(),
                    })
                }
            }
        }

        let missing: Vec<String> = Position::ALL
            .iter()
            .filter(|p| seen[p.ring_index()].is_none())
            .map(|p| p.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ChartError::IncompletePositions {
                found: POSITION_COUNT - missing.len(),
                missing,
            });
        }

        let positions = seen.map(Option::unwrap_or_default);
        let chart = Self {
            soul_branch: lenient("soulPositionBranch", raw.soul_position_branch, Branch::from_name),
            body_branch: lenient("bodyPositionBranch", raw.body_position_branch, Branch::from_name),
            element_class: lenient("elementClass", raw.element_class, ElementClass::from_name),
            year_stem: lenient("yearStem", raw.year_stem, Stem::from_name),
            year_branch: lenient("yearBranch", raw.year_branch, Branch::from_name),
            positions,
        };
        debug!(
            symbols = chart.positions.iter().map(|s| s.len()).sum::<usize>(),
            soul_branch = ?chart.soul_branch,
            year_stem = ?chart.year_stem,
            "chart ingested"
        );
        Ok(chart)
    }

    pub fn soul_branch(&self) -> Option<Branch> {
        self.soul_branch
    }

    pub fn body_branch(&self) -> Option<Branch> {
        self.body_branch
    }

    pub fn element_class(&self) -> Option<ElementClass> {
        self.element_class
    }

    pub fn year_stem(&self) -> Option<Stem> {
        self.year_stem
    }

    pub fn year_branch(&self) -> Option<Branch> {
        self.year_branch
    }

    pub fn symbols(&self, position: Position) -> &[SymbolName] {
        &self.positions[position.ring_index()]
    }

    pub fn contains(&self, position: Position, symbol: &SymbolName) -> bool {
        self.symbols(position).contains(symbol)
    }

    /// First position, in ring order, hosting `symbol`.
    pub fn locate(&self, symbol: &SymbolName) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|p| self.contains(*p, symbol))
    }

    /// Every position with its symbols, in ring order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[SymbolName])> + '_ {
        Position::ALL
            .into_iter()
            .zip(self.positions.iter().map(|s| s.as_slice()))
    }
}

fn canonical_symbols(raw: &[String]) -> SymbolList {
    let mut list = SymbolList::new();
    for name in raw {
        match SymbolName::canonical(name) {
            Some(symbol) if !list.contains(&symbol) => list.push(symbol),
            Some(_) => {}
            None => debug!("skipping blank symbol name"),
        }
    }
    list
}

fn lenient<T>(field: &str, raw: Option<String>, parse: fn(&str) -> Option<T>) -> Option<T> {
    let raw = raw?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        warn!(field, value = %raw, "unparseable chart field, treating as absent");
    }
    parsed
}

/// Programmatic chart construction for tests, benches and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct NatalChartBuilder {
    soul_branch: Option<Branch>,
    body_branch: Option<Branch>,
    element_class: Option<ElementClass>,
    year_stem: Option<Stem>,
    year_branch: Option<Branch>,
    positions: [SymbolList; POSITION_COUNT],
}

impl NatalChartBuilder {
    pub fn soul_branch(mut self, branch: Branch) -> Self {
        self.soul_branch = Some(branch);
        self
    }

    pub fn body_branch(mut self, branch: Branch) -> Self {
        self.body_branch = Some(branch);
        self
    }

    pub fn element_class(mut self, element_class: ElementClass) -> Self {
        self.element_class = Some(element_class);
        self
    }

    pub fn year_stem(mut self, stem: Stem) -> Self {
        self.year_stem = Some(stem);
        self
    }

    pub fn year_branch(mut self, branch: Branch) -> Self {
        self.year_branch = Some(branch);
        self
    }

    /// Place symbols into a position. Names are canonicalized; repeats are
    /// ignored.
    pub fn place<I, S>(mut self, position: Position, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slot = &mut self.positions[position.ring_index()];
        for name in symbols {
            if let Some(symbol) = SymbolName::canonical(name.as_ref()) {
                if !slot.contains(&symbol) {
                    slot.push(symbol);
                }
            }
        }
        self
    }

    pub fn build(self) -> NatalChart {
        NatalChart {
            soul_branch: self.soul_branch,
            body_branch: self.body_branch,
            element_class: self.element_class,
            year_stem: self.year_stem,
            year_branch: self.year_branch,
            positions: self.positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_canonicalizes_and_locates() {
        let chart = NatalChart::builder()
            .place(Position::Wealth, ["太阳", "TaiYang", "天喜"])
            .place(Position::Career, ["紫微"])
            .build();
        let sun = SymbolName::canonical("太陽").unwrap();
        assert_eq!(chart.symbols(Position::Wealth).len(), 2);
        assert_eq!(chart.locate(&sun), Some(Position::Wealth));
        assert!(chart.contains(Position::Career, &SymbolName::canonical("紫薇").unwrap()));
        assert_eq!(chart.locate(&SymbolName::canonical("破軍").unwrap()), None);
    }

    #[test]
    fn empty_builder_has_all_positions_empty() {
        let chart = NatalChart::builder().build();
        assert_eq!(chart.iter().count(), 12);
        assert!(chart.iter().all(|(_, symbols)| symbols.is_empty()));
        assert!(chart.soul_branch().is_none());
    }
}
