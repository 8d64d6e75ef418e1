//! Per-position pipeline: defaults, borrowing, transformation hits and the
//! named special rules.

use test_fixtures::{bare_chart, chart_with, sample_chart};
use ziwei_core::types::{Gender, Position, StrengthGrade, SymbolName};
use ziwei_core::{
    EngineConfig, FixedStrengthResolver, NatalChart, StrengthResolver, SymbolWeightCatalog,
};
use ziwei_scoring::pipeline::{run_pipeline, ComputationContext, RawPositionScore};
use ziwei_scoring::transform::resolve_all;

/// Evaluation year whose annual layer (庚) touches none of the symbols the
/// bare-chart tests place.
const QUIET_YEAR: i64 = 2020;

fn score_with(
    chart: &NatalChart,
    catalog: &SymbolWeightCatalog,
    config: &EngineConfig,
    strength: &dyn StrengthResolver,
    target_year: i64,
) -> Vec<RawPositionScore> {
    let transformations = resolve_all(chart, 38, Gender::Male, target_year);
    let ctx = ComputationContext {
        chart,
        catalog,
        config,
        transformations: &transformations,
        strength,
        target_year,
    };
    run_pipeline(&ctx)
}

fn score(
    chart: &NatalChart,
    catalog: &SymbolWeightCatalog,
    target_year: i64,
) -> Vec<RawPositionScore> {
    score_with(
        chart,
        catalog,
        &EngineConfig::default(),
        &FixedStrengthResolver::default(),
        target_year,
    )
}

fn at(scores: &[RawPositionScore], position: Position) -> &RawPositionScore {
    &scores[position.ring_index()]
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_uncatalogued_symbols_use_defaults() {
    let chart = bare_chart(&[(Position::Soul, &["紫微", "文昌", "紅鸞"])]);
    let scores = score(&chart, &SymbolWeightCatalog::empty(), QUIET_YEAR);
    let soul = at(&scores, Position::Soul);

    // Major 5 + assistant 1 in the base, the minor 1 in the boost.
    assert!(approx(soul.base_score, 6.0));
    assert!(approx(soul.minor_boost, 1.0));
    assert!(approx(soul.raw_score, 7.0));
    assert_eq!(soul.max_rating_cap, None);
    assert!(soul.advisory_tags.is_empty());
}

#[test]
fn test_results_are_in_ring_order() {
    let scores = score(&sample_chart(), &SymbolWeightCatalog::empty(), 2026);
    let positions: Vec<Position> = scores.iter().map(|s| s.position).collect();
    assert_eq!(positions, Position::ALL.to_vec());
}

#[test]
fn test_empty_position_borrows_from_opposite() {
    let chart = bare_chart(&[(Position::Travel, &["紫微", "左輔", "紅鸞"])]);
    let scores = score(&chart, &SymbolWeightCatalog::empty(), QUIET_YEAR);

    let soul = at(&scores, Position::Soul);
    assert!(approx(soul.borrowed_score, 4.2));
    assert!(approx(soul.raw_score, 4.2));
    // The borrowed minor symbol does not feed the boost.
    assert!(approx(soul.minor_boost, 0.0));

    let travel = at(&scores, Position::Travel);
    assert!(approx(travel.borrowed_score, 0.0));
    assert!(approx(travel.raw_score, 7.0));
}

#[test]
fn test_position_with_only_assistants_still_borrows() {
    let chart = bare_chart(&[
        (Position::Career, &["左輔", "右弼"]),
        (Position::Spouse, &["貪狼"]),
    ]);
    let scores = score(&chart, &SymbolWeightCatalog::empty(), QUIET_YEAR);
    let career = at(&scores, Position::Career);
    assert!(approx(career.borrowed_score, 3.5));
    assert!(approx(career.base_score, 5.5));
}

#[test]
fn test_transformation_hits_and_double_convergence() {
    let scores = score(&sample_chart(), &SymbolWeightCatalog::empty(), 2026);
    let wealth = at(&scores, Position::Wealth);

    // 武曲 carries natal excellence (+1) and decadal prosperity (+3); with
    // 祿存 present that is two prosperity hits, earning the +2 bonus.
    assert!(wealth.double_convergence);
    assert!(approx(wealth.transformation_boost, 6.0));
    assert!(approx(wealth.base_score, 18.0));
}

#[test]
fn test_single_prosperity_hit_has_no_bonus() {
    let chart = chart_with(&[(Position::Wealth, &["武曲", "天相"])]);
    let scores = score(&chart, &SymbolWeightCatalog::empty(), 2026);
    let wealth = at(&scores, Position::Wealth);
    assert!(!wealth.double_convergence);
    assert!(approx(wealth.transformation_boost, 4.0));
}

#[test]
fn test_adversity_hit_lowers_the_base() {
    let chart = chart_with(&[(Position::Health, &["太陽"])]);
    let scores = score(&chart, &SymbolWeightCatalog::empty(), 2026);
    let health = at(&scores, Position::Health);
    assert!(approx(health.transformation_boost, -3.0));
    assert!(approx(health.raw_score, 2.0));
}

const ADMINISTRATIVE_CATALOG: &str = r#"{
  "deitySymbols": [
    {"id": "GuanFu", "name": "官府", "baseScore": -2, "advisoryTag": "行政風險"}
  ]
}"#;

#[test]
fn test_administrative_rule_in_its_year() {
    let catalog = SymbolWeightCatalog::from_json(ADMINISTRATIVE_CATALOG).unwrap();
    let scores = score(&sample_chart(), &catalog, 2026);
    let property = at(&scores, Position::Property);

    // 廉貞 natal prosperity +3, 破軍 natal authority +2, 廉貞 annual adversity −3.
    assert!(approx(property.transformation_boost, 2.0));
    assert!(approx(property.base_score, 12.0));
    assert!(approx(property.minor_boost, -2.0));
    // Twice the magnitude of the deity's running score.
    assert!(approx(property.penalty_applied, 4.0));
    assert!(approx(property.raw_score, 6.0));
    assert_eq!(property.advisory_tags, vec!["行政風險".to_string()]);
}

#[test]
fn test_administrative_rule_is_scoped_to_one_year() {
    let catalog = SymbolWeightCatalog::from_json(ADMINISTRATIVE_CATALOG).unwrap();
    let scores = score(&sample_chart(), &catalog, 2025);
    let property = at(&scores, Position::Property);
    assert!(approx(property.penalty_applied, 0.0));
    assert_eq!(property.advisory_tags, vec!["行政風險".to_string()]);
}

#[test]
fn test_restricted_penalty_and_cap() {
    let catalog = SymbolWeightCatalog::from_json(
        r#"{"deitySymbols": [{
            "id": "BaiHu", "name": "白虎", "baseScore": -1.5,
            "penaltyRule": {"restrictedPositions": ["夫妻"], "penaltyAmount": 3, "maxRatingCap": 3},
            "advisoryTag": "留意口舌爭執"
        }]}"#,
    )
    .unwrap();
    let chart = bare_chart(&[
        (Position::Spouse, &["貪狼", "白虎"]),
        (Position::Karma, &["天府", "白虎"]),
    ]);
    let scores = score(&chart, &catalog, QUIET_YEAR);

    let spouse = at(&scores, Position::Spouse);
    assert!(approx(spouse.penalty_applied, 3.0));
    assert!(approx(spouse.raw_score, 0.5));
    assert_eq!(spouse.max_rating_cap, Some(3));
    assert_eq!(spouse.advisory_tags, vec!["留意口舌爭執".to_string()]);

    let karma = at(&scores, Position::Karma);
    assert!(approx(karma.penalty_applied, 0.0));
    assert_eq!(karma.max_rating_cap, None);
    assert!(approx(karma.raw_score, 3.5));
}

#[test]
fn test_adversity_pairing_caps_rating() {
    let catalog = SymbolWeightCatalog::from_json(
        r#"{"deitySymbols": [{
            "id": "SangMen", "name": "喪門", "baseScore": -1,
            "penaltyRule": {"requiresAdversityPairing": true}
        }]}"#,
    )
    .unwrap();
    let chart = chart_with(&[
        (Position::Health, &["太陽", "喪門"]),
        (Position::Travel, &["七殺", "喪門"]),
    ]);
    let scores = score(&chart, &catalog, 2026);
    // Natal adversity lands on 太陽.
    assert_eq!(at(&scores, Position::Health).max_rating_cap, Some(4));
    assert_eq!(at(&scores, Position::Travel).max_rating_cap, None);
}

#[test]
fn test_minor_boost_is_clamped() {
    let catalog = SymbolWeightCatalog::from_json(
        r#"{"minorSymbols": [
            {"id": "HongLuan", "name": "紅鸞", "baseScore": 8},
            {"id": "TianXi", "name": "天喜", "baseScore": 8},
            {"id": "TianXing", "name": "天刑", "baseScore": -8},
            {"id": "TianYao", "name": "天姚", "baseScore": -8}
        ]}"#,
    )
    .unwrap();
    let chart = bare_chart(&[
        (Position::Soul, &["紫微", "紅鸞", "天喜"]),
        (Position::Travel, &["天府", "天刑", "天姚"]),
    ]);
    let scores = score(&chart, &catalog, QUIET_YEAR);

    let soul = at(&scores, Position::Soul);
    assert!(approx(soul.minor_boost, 10.0));
    assert!(approx(soul.raw_score, 15.0));

    let travel = at(&scores, Position::Travel);
    assert!(approx(travel.minor_boost, -10.0));
    assert_eq!(travel.raw_score, 0.0);
}

const WEIGHTED_CATALOG: &str = r#"{
  "majorSymbols": [{
    "id": "WuQu", "name": "武曲", "baseScore": 7,
    "strengthMultiplier": {"Miao": 2.0, "Li": 0.5},
    "positionResonance": {"財帛": 1.3}
  }]
}"#;

#[test]
fn test_strength_and_resonance_multipliers() {
    let catalog = SymbolWeightCatalog::from_json(WEIGHTED_CATALOG).unwrap();
    let chart = bare_chart(&[(Position::Wealth, &["武曲"]), (Position::Soul, &["武曲"])]);
    // 辛 annual layer: no hits on 武曲.
    let scores = score(&chart, &catalog, 2021);

    assert!(approx(at(&scores, Position::Wealth).raw_score, 7.0 * 0.5 * 1.3));
    assert!(approx(at(&scores, Position::Soul).raw_score, 7.0 * 0.5));
}

struct PeakResolver;

impl StrengthResolver for PeakResolver {
    fn resolve(
        &self,
        _symbol: &SymbolName,
        _position: Position,
        _chart: &NatalChart,
    ) -> StrengthGrade {
        StrengthGrade::Miao
    }
}

#[test]
fn test_strength_resolver_is_pluggable() {
    let catalog = SymbolWeightCatalog::from_json(WEIGHTED_CATALOG).unwrap();
    let chart = bare_chart(&[(Position::Wealth, &["武曲"])]);
    let scores = score_with(&chart, &catalog, &EngineConfig::default(), &PeakResolver, 2021);
    assert!(approx(at(&scores, Position::Wealth).raw_score, 7.0 * 2.0 * 1.3));
}

#[test]
fn test_parallel_matches_sequential() {
    let catalog = test_fixtures::load_catalog();
    let chart = sample_chart();
    let parallel = score(&chart, &catalog, 2026);

    let mut config = EngineConfig::default();
    config.scoring.parallel = false;
    let sequential = score_with(
        &chart,
        &catalog,
        &config,
        &FixedStrengthResolver::default(),
        2026,
    );
    assert_eq!(parallel, sequential);
}

#[test]
fn test_raw_scores_never_negative() {
    let catalog = test_fixtures::load_catalog();
    for year in 2020..2032 {
        for raw in score(&sample_chart(), &catalog, year) {
            assert!(raw.raw_score >= 0.0, "{:?} in {year}", raw.position);
        }
    }
}
