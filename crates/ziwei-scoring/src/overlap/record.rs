//! Per-position overlap records and their classification.

use serde::Serialize;
use ziwei_core::types::{ModifierType, Position, SymbolName};

use crate::transform::LayerKind;

/// Resonance class of a position, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    VolatileAmbivalence,
    CriticalRisk,
    MaxOpportunity,
    Warning,
    Good,
    Neutral,
}

impl Classification {
    /// Exhaustive, mutually exclusive mapping from the two counts.
    pub fn classify(adversity_count: u8, prosperity_count: u8) -> Self {
        match (adversity_count, prosperity_count) {
            (a, p) if a >= 2 && p >= 2 => Self::VolatileAmbivalence,
            (a, _) if a >= 2 => Self::CriticalRisk,
            (_, p) if p >= 2 => Self::MaxOpportunity,
            (1, _) => Self::Warning,
            (_, 1) => Self::Good,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VolatileAmbivalence => "volatile-ambivalence",
            Self::CriticalRisk => "critical-risk",
            Self::MaxOpportunity => "max-opportunity",
            Self::Warning => "warning",
            Self::Good => "good",
            Self::Neutral => "neutral",
        }
    }
}

/// One layer's contribution to a position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapTag {
    pub modifier: ModifierType,
    pub symbol: SymbolName,
    pub layer_weight: f64,
}

impl OverlapTag {
    /// Precedence when two modifiers of one layer land in the same position.
    fn precedence(&self) -> u8 {
        match self.modifier {
            ModifierType::Adversity => 0,
            ModifierType::Prosperity => 1,
            ModifierType::Authority => 2,
            ModifierType::Excellence => 3,
        }
    }
}

/// At most one tag per layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayerTags {
    pub natal: Option<OverlapTag>,
    pub decadal: Option<OverlapTag>,
    pub annual: Option<OverlapTag>,
    pub minor_limit: Option<OverlapTag>,
}

impl LayerTags {
    pub fn get(&self, kind: LayerKind) -> Option<&OverlapTag> {
        match kind {
            LayerKind::Natal => self.natal.as_ref(),
            LayerKind::Decadal => self.decadal.as_ref(),
            LayerKind::Annual => self.annual.as_ref(),
            LayerKind::MinorLimit => self.minor_limit.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: LayerKind) -> &mut Option<OverlapTag> {
        match kind {
            LayerKind::Natal => &mut self.natal,
            LayerKind::Decadal => &mut self.decadal,
            LayerKind::Annual => &mut self.annual,
            LayerKind::MinorLimit => &mut self.minor_limit,
        }
    }

    /// Record `tag` for `kind`, keeping the higher-precedence tag when the
    /// layer already has one here. Returns whether `tag` was kept.
    pub fn insert(&mut self, kind: LayerKind, tag: OverlapTag) -> bool {
        let slot = self.slot_mut(kind);
        if slot
            .as_ref()
            .is_some_and(|existing| existing.precedence() <= tag.precedence())
        {
            return false;
        }
        *slot = Some(tag);
        true
    }

    /// Tags in layer order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerKind, &OverlapTag)> {
        LayerKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|tag| (kind, tag)))
    }
}

/// Overlap analysis of one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapRecord {
    pub position: Position,
    pub tags: LayerTags,
    pub prosperity_count: u8,
    pub authority_count: u8,
    pub excellence_count: u8,
    pub adversity_count: u8,
    /// Layer weights summed, adversity tags subtracting theirs.
    pub total_weight: f64,
    pub classification: Classification,
    pub resonance_description: Vec<String>,
}

impl OverlapRecord {
    /// Derive counts, classification and description from the tags.
    pub fn from_tags(position: Position, tags: LayerTags) -> Self {
        let mut counts = [0u8; 4];
        let mut total_weight = 0.0;
        for (_, tag) in tags.iter() {
            counts[tag.modifier.index()] += 1;
            total_weight += if tag.modifier == ModifierType::Adversity {
                -tag.layer_weight
            } else {
                tag.layer_weight
            };
        }
        let prosperity_count = counts[ModifierType::Prosperity.index()];
        let adversity_count = counts[ModifierType::Adversity.index()];
        let resonance_description = describe(position, &tags).into_iter().collect();
        Self {
            position,
            prosperity_count,
            authority_count: counts[ModifierType::Authority.index()],
            excellence_count: counts[ModifierType::Excellence.index()],
            adversity_count,
            total_weight,
            classification: Classification::classify(adversity_count, prosperity_count),
            resonance_description,
            tags,
        }
    }

    pub fn tag_count(&self) -> usize {
        self.tags.iter().count()
    }
}

/// Short display name of a position without its trailing 宮.
fn short_name(position: Position) -> &'static str {
    let name = position.display_name();
    name.strip_suffix('宮').unwrap_or(name)
}

/// `"{position}宮共振：本命X化祿、流年Y化忌"`, or nothing without tags.
fn describe(position: Position, tags: &LayerTags) -> Option<String> {
    let parts: Vec<String> = tags
        .iter()
        .map(|(kind, tag)| format!("{}{}{}", kind.label(), tag.symbol, tag.modifier.label()))
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(format!("{}宮共振：{}", short_name(position), parts.join("、")))
}
