//! The study — both hypothesis tests, run in fixed order.
//!
//! EXECUTION ORDER:
//!   1. Macro thesis: sales growth vs default rate (Pearson)
//!   2. Micro thesis: shadow vs retail spread (simulate + Welch)
//!
//! The two stages share nothing but the config.

use crate::{
    config::StudyConfig,
    error::StatResult,
    macro_data::{self, MACRO_SAMPLE},
    simulator::SpreadSimulator,
    stats::{self, Correlation, WelchTest},
    types::{MarketGroup, MacroObservation, Seed},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MacroReport {
    pub correlation:  Correlation,
    pub significance: f64,
    pub significant:  bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpreadReport {
    pub seed:         Seed,
    pub sample_size:  usize,
    pub shadow_count: usize,
    pub retail_count: usize,
    /// Group a = Shadow, group b = Retail.
    pub welch:        WelchTest,
    pub significance: f64,
    pub significant:  bool,
}

impl SpreadReport {
    pub fn mean_shadow(&self) -> f64 {
        self.welch.mean_a
    }

    pub fn mean_retail(&self) -> f64 {
        self.welch.mean_b
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyReport {
    pub macro_test:  MacroReport,
    pub spread_test: SpreadReport,
}

pub fn run_study(config: &StudyConfig) -> StatResult<StudyReport> {
    config.validate()?;
    log::info!("study start: seed={} samples={}", config.seed(), config.sample_size);

    let macro_test = run_macro_test(&MACRO_SAMPLE, config.macro_significance)?;
    let spread_test = run_spread_test(config)?;

    log::info!(
        "study done: macro_significant={} spread_significant={}",
        macro_test.significant,
        spread_test.significant
    );
    Ok(StudyReport { macro_test, spread_test })
}

pub fn run_macro_test(sample: &[MacroObservation], significance: f64) -> StatResult<MacroReport> {
    let growth = macro_data::sales_growth(sample);
    let defaults = macro_data::default_rates(sample);
    let correlation = stats::pearson(&growth, &defaults)?;
    Ok(MacroReport {
        correlation,
        significance,
        significant: correlation.p_value < significance,
    })
}

pub fn run_spread_test(config: &StudyConfig) -> StatResult<SpreadReport> {
    let table = SpreadSimulator::new(config)?.generate()?;
    let shadow = table.spreads_for(MarketGroup::Shadow);
    let retail = table.spreads_for(MarketGroup::Retail);

    if shadow.is_empty() || retail.is_empty() {
        log::warn!(
            "degenerate draw: shadow={} retail={} of {}",
            shadow.len(),
            retail.len(),
            table.len()
        );
    }

    let welch = stats::welch_t_test(&shadow, &retail)?;
    Ok(SpreadReport {
        seed:         config.seed(),
        sample_size:  table.len(),
        shadow_count: shadow.len(),
        retail_count: retail.len(),
        welch,
        significance: config.spread_significance,
        significant:  welch.p_value < config.spread_significance,
    })
}
