//! Study configuration: defaults, JSON loading, validation.

use spread_core::{
    config::{StudyConfig, DEFAULT_SEED, MAX_SAMPLE_SIZE},
    error::StatError,
    study::run_study,
    types::MarketGroup,
};
use std::io::Write;

fn write_temp(name: &str, body: &str) -> String {
    let path = std::env::temp_dir().join(format!("spread-core-{name}-{}.json", std::process::id()));
    let mut f = std::fs::File::create(&path).expect("create temp config");
    f.write_all(body.as_bytes()).expect("write temp config");
    path.to_string_lossy().into_owned()
}

#[test]
fn defaults_match_canned_study() {
    let c = StudyConfig::default();
    assert_eq!(c.sample_size, 200);
    assert_eq!(c.reference_price, 500_000.0);
    assert_eq!((c.noise_low, c.noise_high), (0.95, 1.05));
    assert_eq!(c.macro_significance, 0.05);
    assert_eq!(c.spread_significance, 0.01);
    assert_eq!(c.scenarios.len(), 2);
    assert_eq!(c.scenarios[0].group, MarketGroup::Shadow);
    assert_eq!(c.scenarios[0].weight, 30.0);
    assert_eq!(c.scenarios[1].group, MarketGroup::Retail);
    assert_eq!(c.scenarios[1].discount, -0.05);
    c.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let path = write_temp("partial", r#"{ "seed": 77, "sample_size": 500 }"#);
    let c = StudyConfig::load(&path).unwrap();
    assert_eq!(c.seed, Some(77));
    assert_eq!(c.seed(), 77);
    assert_eq!(c.sample_size, 500);
    assert_eq!(c.reference_price, 500_000.0);
    assert_eq!(c.scenarios.len(), 2);
    let _ = std::fs::remove_file(path);
}

#[test]
fn file_without_seed_leaves_seed_unset() {
    let path = write_temp("noseed", r#"{ "sample_size": 300 }"#);
    let c = StudyConfig::load(&path).unwrap();
    assert_eq!(c.seed, None, "a config file must not pin the seed");
    assert_eq!(c.seed(), DEFAULT_SEED);
    let _ = std::fs::remove_file(path);
}

#[test]
fn oversized_sample_is_rejected_without_allocating() {
    let c = StudyConfig::default().with_sample_size(MAX_SAMPLE_SIZE + 1);
    assert!(matches!(c.validate(), Err(StatError::InvalidConfig(_))));

    let err = run_study(&StudyConfig::default().with_sample_size(usize::MAX)).unwrap_err();
    assert!(matches!(err, StatError::InvalidConfig(_)), "got {err}");
}

#[test]
fn invalid_json_config_fails_to_load() {
    let path = write_temp("invalid", r#"{ "spread_significance": 1.5 }"#);
    assert!(StudyConfig::load(&path).is_err());
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_fails_to_load() {
    assert!(StudyConfig::load("/nonexistent/study.json").is_err());
}

#[test]
fn validation_rejects_bad_values() {
    let mut c = StudyConfig::default();
    c.sample_size = 0;
    assert!(matches!(c.validate(), Err(StatError::InvalidConfig(_))));

    let mut c = StudyConfig::default();
    c.scenarios.clear();
    assert!(matches!(c.validate(), Err(StatError::InvalidConfig(_))));

    let mut c = StudyConfig::default();
    c.scenarios[0].weight = 0.0;
    assert!(matches!(c.validate(), Err(StatError::InvalidConfig(_))));

    let mut c = StudyConfig::default();
    c.reference_price = -1.0;
    assert!(matches!(c.validate(), Err(StatError::InvalidConfig(_))));

    let mut c = StudyConfig::default();
    c.macro_significance = 0.0;
    assert!(matches!(c.validate(), Err(StatError::InvalidConfig(_))));
}
