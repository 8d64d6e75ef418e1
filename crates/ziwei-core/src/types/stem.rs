use crate::constants::{REFERENCE_EPOCH_YEAR, STEM_COUNT};
use crate::cyclic;

/// One of the ten cyclical stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

const NAMES: [&str; STEM_COUNT] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    pub const ALL: [Stem; STEM_COUNT] = [
        Self::Jia,
        Self::Yi,
        Self::Bing,
        Self::Ding,
        Self::Wu,
        Self::Ji,
        Self::Geng,
        Self::Xin,
        Self::Ren,
        Self::Gui,
    ];

    /// Position in the cycle, 甲 = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stem of a calendar year (1984 = 甲).
    pub fn from_year(year: i64) -> Self {
        Self::ALL[cyclic::wrap_offset(year, REFERENCE_EPOCH_YEAR, STEM_COUNT)]
    }

    /// Yang stems sit on even indices (甲 丙 戊 庚 壬).
    pub fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    pub fn advance(self, steps: i64) -> Self {
        Self::ALL[cyclic::advance(self.index(), steps, STEM_COUNT)]
    }

    /// Stem of the 寅 position for a chart born in a year with this stem.
    pub fn reference_stem(self) -> Self {
        match self {
            Self::Jia | Self::Ji => Self::Bing,
            Self::Yi | Self::Geng => Self::Wu,
            Self::Bing | Self::Xin => Self::Geng,
            Self::Ding | Self::Ren => Self::Ren,
            Self::Wu | Self::Gui => Self::Jia,
        }
    }

    pub fn as_str(self) -> &'static str {
        NAMES[self.index()]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Self::ALL[i])
    }
}

super::name_serde!(Stem, "stem");
