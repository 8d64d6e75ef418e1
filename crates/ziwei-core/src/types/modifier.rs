use crate::constants::MODIFIER_COUNT;

/// The four transformation modifier types (四化).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModifierType {
    Prosperity,
    Authority,
    Excellence,
    Adversity,
}

impl ModifierType {
    pub const ALL: [ModifierType; MODIFIER_COUNT] = [
        Self::Prosperity,
        Self::Authority,
        Self::Excellence,
        Self::Adversity,
    ];

    /// Signed score contribution of the modifier: 祿 +3, 權 +2, 科 +1, 忌 −3.
    pub fn canonical_weight(self) -> f64 {
        match self {
            Self::Prosperity => 3.0,
            Self::Authority => 2.0,
            Self::Excellence => 1.0,
            Self::Adversity => -3.0,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-character name (祿 權 科 忌).
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Prosperity => "祿",
            Self::Authority => "權",
            Self::Excellence => "科",
            Self::Adversity => "忌",
        }
    }

    /// Full transformation label (化祿 …).
    pub fn label(self) -> &'static str {
        match self {
            Self::Prosperity => "化祿",
            Self::Authority => "化權",
            Self::Excellence => "化科",
            Self::Adversity => "化忌",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prosperity => "prosperity",
            Self::Authority => "authority",
            Self::Excellence => "excellence",
            Self::Adversity => "adversity",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "prosperity" | "祿" | "禄" | "化祿" | "化禄" => Some(Self::Prosperity),
            "authority" | "權" | "权" | "化權" | "化权" => Some(Self::Authority),
            "excellence" | "科" | "化科" => Some(Self::Excellence),
            "adversity" | "忌" | "化忌" => Some(Self::Adversity),
            _ => None,
        }
    }
}

super::name_serde!(ModifierType, "modifier type");
