//! Tests for engine configuration loading and validation.

use std::sync::Mutex;

use ziwei_core::config::EngineConfig;
use ziwei_core::errors::ConfigError;

/// Serializes tests that touch `ZIWEI_*` environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_ziwei_env_vars() {
    for key in [
        "ZIWEI_SCORING_PARALLEL",
        "ZIWEI_SCORING_BORROW_RATIO",
        "ZIWEI_SCORING_MINOR_BOOST_LIMIT",
        "ZIWEI_SPATIAL_CEILING",
        "ZIWEI_FOCUS_AMPLIFICATION",
        "ZIWEI_VALIDATION_MIN_AGE",
        "ZIWEI_VALIDATION_MAX_AGE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults_match_documented_constants() {
    let config = EngineConfig::default();
    assert_eq!(config.scoring.default_major_base_score, 5.0);
    assert_eq!(config.scoring.default_base_score, 1.0);
    assert_eq!(config.scoring.borrow_ratio, 0.7);
    assert_eq!(config.scoring.minor_boost_limit, 10.0);
    assert_eq!(config.scoring.double_convergence_bonus, 2.0);
    assert_eq!(config.spatial.opposite_weight, 0.4);
    assert_eq!(config.spatial.trine_weight, 0.2);
    assert_eq!(config.spatial.ceiling, 40.0);
    assert_eq!(config.focus.amplification, 1.5);
    assert_eq!(config.overlap.annual_weight, 2.0);
    assert_eq!(config.validation.min_age, 1);
    assert_eq!(config.validation.max_age, 120);
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = EngineConfig::from_toml(
        r#"
[spatial]
ceiling = 50.0

[overlap]
annual_weight = 3.0
"#,
    )
    .unwrap();
    assert_eq!(config.spatial.ceiling, 50.0);
    assert_eq!(config.spatial.self_weight, 1.0);
    assert_eq!(config.overlap.annual_weight, 3.0);
    assert_eq!(config.overlap.decadal_weight, 1.5);
    assert!(config.scoring.parallel);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = EngineConfig::from_toml("[spatial\nceiling = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        ("[spatial]\nceiling = 0.0", "spatial.ceiling"),
        ("[spatial]\nopposite_weight = -0.1", "spatial.opposite_weight"),
        ("[overlap]\ndecadal_weight = -1.0", "overlap.decadal_weight"),
        ("[focus]\namplification = 0.9", "focus.amplification"),
        ("[scoring]\nborrow_ratio = 1.5", "scoring.borrow_ratio"),
        ("[validation]\nmin_age = 0", "validation.min_age"),
        ("[validation]\nmin_age = 30\nmax_age = 20", "validation.max_age"),
    ];
    for (toml, expected_field) in cases {
        let config = EngineConfig::from_toml(toml).unwrap();
        match config.validate() {
            Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected validation failure for {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn test_load_applies_env_over_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_ziwei_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ziwei.toml");
    std::fs::write(
        &path,
        r#"
[scoring]
parallel = true
borrow_ratio = 0.5

[validation]
max_age = 100
"#,
    )
    .unwrap();

    std::env::set_var("ZIWEI_SCORING_PARALLEL", "false");
    let config = EngineConfig::load(&path).unwrap();
    clear_ziwei_env_vars();

    assert!(!config.scoring.parallel);
    assert_eq!(config.scoring.borrow_ratio, 0.5);
    assert_eq!(config.validation.max_age, 100);
}

#[test]
fn test_load_validates_after_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_ziwei_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ziwei.toml");
    std::fs::write(&path, "").unwrap();

    std::env::set_var("ZIWEI_FOCUS_AMPLIFICATION", "0.5");
    let result = EngineConfig::load(&path);
    clear_ziwei_env_vars();

    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_load_missing_file() {
    let err = EngineConfig::load(std::path::Path::new("/nonexistent/ziwei.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = EngineConfig::default();
    let serialized = toml::to_string(&config).unwrap();
    assert_eq!(EngineConfig::from_toml(&serialized).unwrap(), config);
}
