//! Stem → modifier assignment table (十干四化).

use ziwei_core::types::{ModifierType, Stem};

/// Targets in modifier order: prosperity, authority, excellence, adversity.
const TABLE: [[&str; 4]; 10] = [
    ["廉貞", "破軍", "武曲", "太陽"], // 甲
    ["天機", "天梁", "紫微", "太陰"], // 乙
    ["天同", "天機", "文昌", "廉貞"], // 丙
    ["太陰", "天同", "天機", "巨門"], // 丁
    ["貪狼", "太陰", "右弼", "天機"], // 戊
    ["武曲", "貪狼", "天梁", "文曲"], // 己
    ["太陽", "武曲", "太陰", "天同"], // 庚
    ["巨門", "太陽", "文曲", "文昌"], // 辛
    ["天梁", "紫微", "左輔", "武曲"], // 壬
    ["破軍", "巨門", "太陰", "貪狼"], // 癸
];

/// The four (modifier, canonical symbol name) assignments of `stem`.
pub fn assignments(stem: Stem) -> [(ModifierType, &'static str); 4] {
    let row = TABLE[stem.index()];
    [
        (ModifierType::Prosperity, row[0]),
        (ModifierType::Authority, row[1]),
        (ModifierType::Excellence, row[2]),
        (ModifierType::Adversity, row[3]),
    ]
}
