//! Closed domain enumerations: stems, branches, positions, gender, element
//! class, modifier types, strength grades and canonical symbol names.

mod branch;
mod element;
mod gender;
mod modifier;
mod position;
mod stem;
mod strength;
mod symbol;

pub use branch::Branch;
pub use element::ElementClass;
pub use gender::Gender;
pub use modifier::ModifierType;
pub use position::Position;
pub use stem::Stem;
pub use strength::StrengthGrade;
pub use symbol::{SymbolCategory, SymbolName};

/// Serialize a type through its display name and deserialize it through its
/// lenient parser, so JSON and TOML carry the same spellings users type.
macro_rules! name_serde {
    ($ty:ty, $expecting:literal) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                <$ty>::from_name(&raw).ok_or_else(|| {
                    serde::de::Error::custom(format!(concat!("unknown ", $expecting, ": {}"), raw))
                })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use name_serde;
