use crate::constants::POSITION_COUNT;
use crate::cyclic;

/// One of the twelve life-domain positions, in fixed logical ring order.
///
/// The order is independent of which branch the soul position occupies.
/// `Soul` is the "Self" position the whole ring is counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Soul,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Karma,
    Parents,
}

const IDS: [&str; POSITION_COUNT] = [
    "Self", "Siblings", "Spouse", "Children", "Wealth", "Health", "Travel", "Friends", "Career",
    "Property", "Karma", "Parents",
];

const NAMES: [&str; POSITION_COUNT] = [
    "命宮", "兄弟", "夫妻", "子女", "財帛", "疾厄", "遷移", "僕役", "官祿", "田宅", "福德", "父母",
];

/// Simplified-script spellings that differ from the traditional names.
const SIMPLIFIED: [(&str, Position); 5] = [
    ("命宫", Position::Soul),
    ("财帛", Position::Wealth),
    ("迁移", Position::Travel),
    ("仆役", Position::Friends),
    ("官禄", Position::Career),
];

impl Position {
    pub const ALL: [Position; POSITION_COUNT] = [
        Self::Soul,
        Self::Siblings,
        Self::Spouse,
        Self::Children,
        Self::Wealth,
        Self::Health,
        Self::Travel,
        Self::Friends,
        Self::Career,
        Self::Property,
        Self::Karma,
        Self::Parents,
    ];

    /// Index in the logical ring, Self = 0.
    pub fn ring_index(self) -> usize {
        self as usize
    }

    /// Position at `index`, wrapping around the ring.
    pub fn at(index: i64) -> Self {
        Self::ALL[cyclic::wrap(index, POSITION_COUNT)]
    }

    pub fn advance(self, steps: i64) -> Self {
        Self::at(self.ring_index() as i64 + steps)
    }

    /// The position across the ring (+6).
    pub fn opposite(self) -> Self {
        self.advance(6)
    }

    /// The two trine positions (+4, +8).
    pub fn trines(self) -> [Self; 2] {
        [self.advance(4), self.advance(8)]
    }

    /// English identifier used by the catalog's resonance tables.
    pub fn as_str(self) -> &'static str {
        IDS[self.ring_index()]
    }

    /// Traditional Chinese display name.
    pub fn display_name(self) -> &'static str {
        NAMES[self.ring_index()]
    }

    /// Parse an English id or a traditional/simplified Chinese name, with or
    /// without the trailing 宮 suffix.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some(i) = IDS.iter().position(|id| id.eq_ignore_ascii_case(name)) {
            return Some(Self::ALL[i]);
        }
        if let Some(i) = NAMES.iter().position(|n| *n == name) {
            return Some(Self::ALL[i]);
        }
        if let Some((_, p)) = SIMPLIFIED.iter().find(|(n, _)| *n == name) {
            return Some(*p);
        }
        let stripped = name
            .strip_suffix('宮')
            .or_else(|| name.strip_suffix('宫'))?;
        if stripped == "命" || stripped.is_empty() {
            return None;
        }
        Self::from_name(stripped)
    }
}

super::name_serde!(Position, "position");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_positions_follow_ring_geometry() {
        assert_eq!(Position::Soul.opposite(), Position::Travel);
        assert_eq!(Position::Soul.trines(), [Position::Wealth, Position::Career]);
        assert_eq!(Position::Parents.opposite(), Position::Health);
        assert_eq!(
            Position::Karma.trines(),
            [Position::Spouse, Position::Travel]
        );
    }

    #[test]
    fn parses_all_spellings() {
        assert_eq!(Position::from_name("Self"), Some(Position::Soul));
        assert_eq!(Position::from_name("wealth"), Some(Position::Wealth));
        assert_eq!(Position::from_name("命宮"), Some(Position::Soul));
        assert_eq!(Position::from_name("命宫"), Some(Position::Soul));
        assert_eq!(Position::from_name("财帛宫"), Some(Position::Wealth));
        assert_eq!(Position::from_name("官祿宮"), Some(Position::Career));
        assert_eq!(Position::from_name("夫妻宮"), Some(Position::Spouse));
        assert_eq!(Position::from_name("命"), None);
        assert_eq!(Position::from_name("宮"), None);
    }
}
