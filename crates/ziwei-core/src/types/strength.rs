use serde::{Deserialize, Serialize};

/// Positional strength state of a symbol (廟 旺 得 利 平 不 陷).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum StrengthGrade {
    Miao,
    Wang,
    De,
    #[default]
    Li,
    Ping,
    Bu,
    Xian,
}

impl StrengthGrade {
    pub const ALL: [StrengthGrade; 7] = [
        Self::Miao,
        Self::Wang,
        Self::De,
        Self::Li,
        Self::Ping,
        Self::Bu,
        Self::Xian,
    ];
}
