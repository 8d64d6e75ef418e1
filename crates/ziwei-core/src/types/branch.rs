use crate::constants::{BRANCH_COUNT, REFERENCE_EPOCH_YEAR};
use crate::cyclic;

/// One of the twelve cyclical branches, in calendar order (子 first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

const NAMES: [&str; BRANCH_COUNT] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Calendar index of 寅, where the chart ring starts.
const RING_ORIGIN: usize = 2;

impl Branch {
    pub const ALL: [Branch; BRANCH_COUNT] = [
        Self::Zi,
        Self::Chou,
        Self::Yin,
        Self::Mao,
        Self::Chen,
        Self::Si,
        Self::Wu,
        Self::Wei,
        Self::Shen,
        Self::You,
        Self::Xu,
        Self::Hai,
    ];

    /// Calendar index, 子 = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Index on the chart ring, 寅 = 0 … 子 = 10, 丑 = 11.
    pub fn ring_index(self) -> usize {
        cyclic::offset(RING_ORIGIN, self.index(), BRANCH_COUNT)
    }

    pub fn from_ring_index(index: i64) -> Self {
        Self::ALL[cyclic::advance(RING_ORIGIN, index, BRANCH_COUNT)]
    }

    /// Branch of a calendar year (1984 = 子).
    pub fn from_year(year: i64) -> Self {
        Self::ALL[cyclic::wrap_offset(year, REFERENCE_EPOCH_YEAR, BRANCH_COUNT)]
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

super::name_serde!(Branch, "branch");
