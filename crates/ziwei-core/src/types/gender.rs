/// Two-valued gender used by the rotation-direction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "M" | "m" | "male" | "Male" | "MALE" | "男" => Some(Self::Male),
            "F" | "f" | "female" | "Female" | "FEMALE" | "女" => Some(Self::Female),
            _ => None,
        }
    }
}

super::name_serde!(Gender, "gender");
