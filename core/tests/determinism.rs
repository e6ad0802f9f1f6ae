//! Same seed, same study. Different seed, different sample.

use spread_core::{
    config::StudyConfig,
    simulator::SpreadSimulator,
    study::run_spread_test,
};

#[test]
fn same_seed_produces_identical_spread_tests() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;
    let config = StudyConfig::default().with_seed(SEED);

    let a = run_spread_test(&config).expect("run a");
    let b = run_spread_test(&config).expect("run b");

    assert_eq!(a.mean_shadow(), b.mean_shadow());
    assert_eq!(a.mean_retail(), b.mean_retail());
    assert_eq!(a.welch.t_statistic, b.welch.t_statistic);
    assert_eq!(a.welch.p_value, b.welch.p_value);
    assert_eq!(a.shadow_count, b.shadow_count);
}

#[test]
fn same_seed_produces_identical_records() {
    let config = StudyConfig::default().with_seed(7);
    let a = SpreadSimulator::new(&config).unwrap().generate().unwrap();
    let b = SpreadSimulator::new(&config).unwrap().generate().unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_produce_different_samples() {
    let a = SpreadSimulator::new(&StudyConfig::default().with_seed(42))
        .unwrap()
        .generate()
        .unwrap();
    let b = SpreadSimulator::new(&StudyConfig::default().with_seed(99))
        .unwrap()
        .generate()
        .unwrap();
    assert_ne!(a, b, "Different seeds produced identical samples; seed is not being used");
}

#[test]
fn changing_weights_keeps_noise_stream() {
    // Noise has its own stream, so a listing drawn into the same group at
    // the same position gets the same spread regardless of the weights.
    let base = StudyConfig::default().with_seed(11).with_sample_size(500);
    let mut retail_only = base.clone();
    retail_only.scenarios[0].weight = 1e-12;

    let a = SpreadSimulator::new(&base).unwrap().generate().unwrap();
    let b = SpreadSimulator::new(&retail_only).unwrap().generate().unwrap();

    let shared: Vec<_> = a
        .records()
        .iter()
        .zip(b.records())
        .filter(|(x, y)| x.group == y.group)
        .collect();
    assert!(!shared.is_empty());
    for (x, y) in shared {
        assert_eq!(x.spread_pct, y.spread_pct);
    }
}
