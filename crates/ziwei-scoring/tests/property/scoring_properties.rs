use std::sync::OnceLock;

use proptest::prelude::*;
use ziwei_core::config::{FocusConfig, SpatialConfig};
use ziwei_core::constants::POSITION_COUNT;
use ziwei_core::types::{Branch, ElementClass, Gender, Position, Stem};
use ziwei_core::{EngineConfig, NatalChart, SymbolWeightCatalog};
use ziwei_scoring::overlap::Classification;
use ziwei_scoring::{focus, spatial, EvaluationParams, ScoringEngine};

const POOL: [&str; 24] = [
    "紫微", "天機", "太陽", "武曲", "天同", "廉貞", "天府", "太陰", "貪狼", "巨門", "天相", "天梁",
    "七殺", "破軍", "左輔", "文昌", "文曲", "祿存", "擎羊", "紅鸞", "天喜", "官府", "白虎", "喪門",
];

fn engine() -> &'static ScoringEngine {
    static ENGINE: OnceLock<ScoringEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        ScoringEngine::new(test_fixtures::load_catalog(), EngineConfig::default()).unwrap()
    })
}

fn arb_chart() -> impl Strategy<Value = NatalChart> {
    (
        0usize..10,
        0usize..12,
        0usize..5,
        prop::collection::vec(prop::collection::vec(0usize..POOL.len(), 0..5), POSITION_COUNT),
    )
        .prop_map(|(stem, branch, element, placements)| {
            placements
                .iter()
                .zip(Position::ALL)
                .fold(
                    NatalChart::builder()
                        .year_stem(Stem::ALL[stem])
                        .soul_branch(Branch::ALL[branch])
                        .element_class(ElementClass::ALL[element]),
                    |builder, (picks, position)| {
                        builder.place(position, picks.iter().map(|i| POOL[*i]))
                    },
                )
                .build()
        })
}

fn arb_params() -> impl Strategy<Value = EvaluationParams> {
    (1i64..=120, any::<bool>(), 1900i64..2100).prop_map(|(age, male, target_year)| {
        EvaluationParams {
            age,
            gender: if male { Gender::Male } else { Gender::Female },
            target_year,
        }
    })
}

proptest! {
    #[test]
    fn raw_scores_are_non_negative(chart in arb_chart(), params in arb_params()) {
        let evaluation = engine().evaluate(&chart, &params).unwrap();
        for raw in &evaluation.raw_scores {
            prop_assert!(raw.raw_score >= 0.0, "{:?} scored {}", raw.position, raw.raw_score);
            prop_assert!((-10.0..=10.0).contains(&raw.minor_boost));
        }
    }

    #[test]
    fn spatial_scores_stay_in_range(raw in prop::array::uniform12(0.0f64..500.0)) {
        for score in spatial::aggregate(&raw, &SpatialConfig::default()) {
            prop_assert!((0.0..=100.0).contains(&score.normalized_score));
        }
    }

    #[test]
    fn focus_never_decreases(
        raw in prop::array::uniform12(0.0f64..200.0),
        focus_index in 0usize..12,
        amplification in 1.0f64..3.0,
    ) {
        let spatial = spatial::aggregate(&raw, &SpatialConfig::default());
        let config = FocusConfig { amplification };
        let focused = focus::amplify(&spatial, Some(Position::ALL[focus_index]), &config);
        for score in focused {
            prop_assert!(score.amplified_score >= score.normalized_score);
            prop_assert!(score.amplified_score <= 100.0);
        }
    }

    #[test]
    fn at_most_four_tags_per_position(chart in arb_chart(), params in arb_params()) {
        let evaluation = engine().evaluate(&chart, &params).unwrap();
        for record in evaluation.overlap.records.values() {
            let counted = record.prosperity_count
                + record.authority_count
                + record.excellence_count
                + record.adversity_count;
            prop_assert!(record.tag_count() <= 4);
            prop_assert_eq!(usize::from(counted), record.tag_count());
        }
    }

    #[test]
    fn classification_is_exhaustive(chart in arb_chart(), params in arb_params()) {
        let evaluation = engine().evaluate(&chart, &params).unwrap();
        let summary = &evaluation.overlap.summary;
        for record in evaluation.overlap.records.values() {
            let expected =
                Classification::classify(record.adversity_count, record.prosperity_count);
            prop_assert_eq!(record.classification, expected);
            let memberships = [
                summary.volatile_positions.contains(&record.position),
                summary.critical_risk_positions.contains(&record.position),
                summary.max_opportunity_positions.contains(&record.position),
            ];
            let headline = matches!(
                record.classification,
                Classification::VolatileAmbivalence
                    | Classification::CriticalRisk
                    | Classification::MaxOpportunity
            );
            prop_assert_eq!(memberships.iter().filter(|m| **m).count(), usize::from(headline));
        }
    }

    #[test]
    fn evaluation_is_deterministic(chart in arb_chart(), params in arb_params()) {
        let first = engine().evaluate(&chart, &params).unwrap();
        let second = engine().evaluate(&chart, &params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_catalog_never_fails(chart in arb_chart(), params in arb_params()) {
        let engine =
            ScoringEngine::new(SymbolWeightCatalog::empty(), EngineConfig::default()).unwrap();
        prop_assert!(engine.evaluate(&chart, &params).is_ok());
    }
}
