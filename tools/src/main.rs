//! spread-runner: headless runner for the shadow-spread validation study.
//!
//! Usage:
//!   spread-runner
//!   spread-runner --seed 12345 --samples 200
//!   spread-runner --config study.json --json

use anyhow::Result;
use spread_core::{config::StudyConfig, report, study};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_mode = args.iter().any(|a| a == "--json");
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str());

    let mut config = match config_path {
        Some(path) => StudyConfig::load(path)?,
        None => StudyConfig::default(),
    };
    // Without a seed on the command line or in the config every run draws a fresh sample.
    let seed = parse_arg(&args, "--seed", config.seed.unwrap_or_else(clock_seed));
    let samples = parse_arg(&args, "--samples", config.sample_size);
    config = config.with_seed(seed).with_sample_size(samples);

    log::info!("spread-runner seed={seed} samples={samples}");

    let result = study::run_study(&config)?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in report::render(&result) {
            println!("{line}");
        }
        println!();
        println!("  (seed: {seed}; rerun with --seed {seed} to reproduce)");
    }

    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
