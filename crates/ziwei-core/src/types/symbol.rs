use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scoring category of a symbol.
///
/// Only `Major` and `Assistant` symbols roll into a position's base total;
/// `Minor` and `Deity` symbols feed the bounded minor boost instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolCategory {
    Major,
    Assistant,
    Minor,
    Deity,
}

impl SymbolCategory {
    pub fn rolls_into_base(self) -> bool {
        matches!(self, Self::Major | Self::Assistant)
    }
}

const MAJORS: [&str; 14] = [
    "紫微", "天機", "太陽", "武曲", "天同", "廉貞", "天府", "太陰", "貪狼", "巨門", "天相", "天梁",
    "七殺", "破軍",
];

const ASSISTANTS: [&str; 14] = [
    "左輔", "右弼", "文昌", "文曲", "天魁", "天鉞", "擎羊", "陀羅", "火星", "鈴星", "地劫", "地空",
    "祿存", "天馬",
];

/// Variant spelling → canonical traditional name.
const SCRIPT_VARIANTS: &[(&str, &str)] = &[
    ("紫薇", "紫微"),
    ("天机", "天機"),
    ("太阳", "太陽"),
    ("太阴", "太陰"),
    ("廉贞", "廉貞"),
    ("贪狼", "貪狼"),
    ("巨门", "巨門"),
    ("七杀", "七殺"),
    ("破军", "破軍"),
    ("左辅", "左輔"),
    ("天钺", "天鉞"),
    ("陀罗", "陀羅"),
    ("铃星", "鈴星"),
    ("禄存", "祿存"),
    ("天马", "天馬"),
    ("天伤", "天傷"),
    ("天寿", "天壽"),
    ("红鸾", "紅鸞"),
    ("天厨", "天廚"),
    ("天贵", "天貴"),
    ("华盖", "華蓋"),
    ("天虚", "天虛"),
    ("台辅", "台輔"),
    ("封诰", "封誥"),
    ("龙池", "龍池"),
    ("凤阁", "鳳閣"),
    ("阴煞", "陰煞"),
    ("青龙", "青龍"),
    ("将军", "將軍"),
    ("奏书", "奏書"),
];

/// Pinyin identifier → canonical traditional name.
const PINYIN_IDS: &[(&str, &str)] = &[
    ("ZiWei", "紫微"),
    ("TianFu", "天府"),
    ("TaiYang", "太陽"),
    ("WuQu", "武曲"),
    ("LianZhen", "廉貞"),
    ("TianLiang", "天梁"),
    ("QiSha", "七殺"),
    ("TianXiang", "天相"),
    ("TianJi", "天機"),
    ("JuMen", "巨門"),
    ("TanLang", "貪狼"),
    ("TaiYin", "太陰"),
    ("TianTong", "天同"),
    ("PoJun", "破軍"),
    ("ZuoFu", "左輔"),
    ("YouBi", "右弼"),
    ("WenChang", "文昌"),
    ("WenQu", "文曲"),
    ("TianKui", "天魁"),
    ("TianYue", "天鉞"),
    ("LuCun", "祿存"),
    ("TianMa", "天馬"),
    ("QingYang", "擎羊"),
    ("TuoLuo", "陀羅"),
    ("HuoXing", "火星"),
    ("LingXing", "鈴星"),
    ("DiJie", "地劫"),
    ("DiKong", "地空"),
];

/// Canonical symbol name.
///
/// Construction always goes through [`SymbolName::canonical`], so two values
/// compare equal exactly when they name the same symbol regardless of the
/// script or id the provider used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolName(Box<str>);

impl SymbolName {
    /// Resolve a raw spelling to its canonical form. Unknown names pass
    /// through trimmed; an empty name yields `None`.
    pub fn canonical(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let resolved = SCRIPT_VARIANTS
            .iter()
            .chain(PINYIN_IDS.iter())
            .find(|(variant, _)| *variant == raw)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(raw);
        Some(Self(resolved.into()))
    }

    pub fn from_name(raw: &str) -> Option<Self> {
        Self::canonical(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pinyin id of the symbol, when it has one.
    pub fn pinyin_id(&self) -> Option<&'static str> {
        PINYIN_IDS
            .iter()
            .find(|(_, canonical)| *canonical == self.as_str())
            .map(|(id, _)| *id)
    }

    /// Category known from the symbol itself, before catalog membership.
    pub fn intrinsic_category(&self) -> Option<SymbolCategory> {
        let name = self.as_str();
        if MAJORS.contains(&name) {
            Some(SymbolCategory::Major)
        } else if ASSISTANTS.contains(&name) {
            Some(SymbolCategory::Assistant)
        } else {
            None
        }
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SymbolName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SymbolName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::canonical(&raw).ok_or_else(|| serde::de::Error::custom("empty symbol name"))
    }
}
