/// Five-valued element class of a chart; fixes the first decadal start age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementClass {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

impl ElementClass {
    pub const ALL: [ElementClass; 5] = [
        Self::Water2,
        Self::Wood3,
        Self::Metal4,
        Self::Earth5,
        Self::Fire6,
    ];

    /// Age at which the first ten-year span begins.
    pub fn start_age(self) -> u32 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    /// Accepts the full class name, or any string naming the element.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let first = name.chars().next()?;
        match first {
            '水' => Some(Self::Water2),
            '木' => Some(Self::Wood3),
            '金' => Some(Self::Metal4),
            '土' => Some(Self::Earth5),
            '火' => Some(Self::Fire6),
            _ => None,
        }
    }
}

super::name_serde!(ElementClass, "element class");
