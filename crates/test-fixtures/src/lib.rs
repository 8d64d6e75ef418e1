//! Test fixture loader for chart and catalog datasets, plus in-code chart
//! builders shared by tests and benches across the workspace.

use serde::de::DeserializeOwned;
use std::path::PathBuf;
use ziwei_core::types::{Branch, ElementClass, Position, Stem};
use ziwei_core::{NatalChart, RawChart, SymbolWeightCatalog};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("charts").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_str(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture_str(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Load a provider chart from `charts/<name>.json`.
pub fn load_raw_chart(name: &str) -> RawChart {
    load_fixture(&format!("charts/{name}.json"))
}

/// Load and canonicalize a chart from `charts/<name>.json`.
///
/// # Panics
/// Panics if the chart is structurally invalid.
pub fn load_chart(name: &str) -> NatalChart {
    NatalChart::from_raw(load_raw_chart(name))
        .unwrap_or_else(|e| panic!("Fixture chart {name} is invalid: {e}"))
}

/// Load the shared symbol weight catalog.
pub fn load_catalog() -> SymbolWeightCatalog {
    let json = load_fixture_str("catalog/symbol_weights.json");
    SymbolWeightCatalog::from_json(&json)
        .unwrap_or_else(|e| panic!("Fixture catalog is invalid: {e}"))
}

/// Chart with fixed metadata (甲 year, 寅 soul, 金四局) and the given
/// placements; unlisted positions stay empty.
pub fn chart_with(placements: &[(Position, &[&str])]) -> NatalChart {
    placements
        .iter()
        .fold(base_builder(), |builder, (position, symbols)| {
            builder.place(*position, symbols.iter())
        })
        .build()
}

/// Chart with no metadata at all. Every transformation layer except the
/// annual one degrades to empty.
pub fn bare_chart(placements: &[(Position, &[&str])]) -> NatalChart {
    placements
        .iter()
        .fold(NatalChart::builder(), |builder, (position, symbols)| {
            builder.place(*position, symbols.iter())
        })
        .build()
}

fn base_builder() -> ziwei_core::NatalChartBuilder {
    NatalChart::builder()
        .year_stem(Stem::Jia)
        .year_branch(Branch::Zi)
        .soul_branch(Branch::Yin)
        .body_branch(Branch::Wu)
        .element_class(ElementClass::Metal4)
}

/// The in-code twin of `charts/jia_yin_metal.json`.
///
/// For a 38-year-old male evaluated for 2026 the layers resolve to:
/// natal 甲, decadal 己 on Children, annual 丙 on Wealth, minor limit 丁 on
/// Siblings.
pub fn sample_chart() -> NatalChart {
    chart_with(&[
        (Position::Soul, &["紫微", "天府", "文昌"]),
        (Position::Siblings, &["太陰", "天鉞"]),
        (Position::Spouse, &["貪狼", "白虎"]),
        (Position::Children, &["巨門", "天同"]),
        (Position::Wealth, &["武曲", "天相", "祿存", "擎羊"]),
        (Position::Health, &["太陽", "天梁", "喪門"]),
        (Position::Travel, &["七殺", "天魁"]),
        (Position::Friends, &["天機", "紅鸞"]),
        (Position::Career, &["左輔", "右弼"]),
        (Position::Property, &["廉貞", "破軍", "官府"]),
        (Position::Karma, &["文曲", "天喜"]),
        (Position::Parents, &["陀羅"]),
    ])
}
