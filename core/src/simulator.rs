//! Spread simulator: synthetic listings quoted against fair market value.
//!
//! Every listing draws its market segment from the scenario weights,
//! then a multiplicative negotiation noise on the discounted ask.
//!   ask    = reference * (1 - discount) * noise
//!   spread = (reference - ask) / reference * 100

use crate::{
    config::{MarketScenario, StudyConfig},
    error::{StatError, StatResult},
    rng::{RngBank, StreamSlot},
    types::{MarketGroup, SpreadRecord},
};

pub struct SpreadSimulator<'a> {
    config: &'a StudyConfig,
}

impl<'a> SpreadSimulator<'a> {
    pub fn new(config: &'a StudyConfig) -> StatResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate `config.sample_size` records from `config.seed()`.
    pub fn generate(&self) -> StatResult<SpreadTable> {
        let bank = RngBank::new(self.config.seed());
        let mut draw = bank.for_stream(StreamSlot::ScenarioDraw);
        let mut noise = bank.for_stream(StreamSlot::PriceNoise);
        let weights: Vec<f64> = self.config.scenarios.iter().map(|s| s.weight).collect();

        let mut records = Vec::with_capacity(self.config.sample_size);
        for _ in 0..self.config.sample_size {
            let idx = draw
                .weighted_index(&weights)
                .ok_or_else(|| StatError::InvalidConfig("scenario weights sum to zero".into()))?;
            let scenario = &self.config.scenarios[idx];
            let factor = noise.uniform(self.config.noise_low, self.config.noise_high);
            records.push(SpreadRecord {
                group:      scenario.group,
                spread_pct: self.spread_pct(scenario, factor),
            });
        }

        let table = SpreadTable { records };
        log::debug!(
            "simulated {} listings (seed={}, streams={}/{}, shadow={}, retail={})",
            table.len(),
            bank.seed(),
            draw.name,
            noise.name,
            table.count(MarketGroup::Shadow),
            table.count(MarketGroup::Retail)
        );
        Ok(table)
    }

    fn spread_pct(&self, scenario: &MarketScenario, noise: f64) -> f64 {
        let fmv = self.config.reference_price;
        let ask = fmv * (1.0 - scenario.discount) * noise;
        (fmv - ask) / fmv * 100.0
    }
}

/// In-memory table of simulated listings, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpreadTable {
    records: Vec<SpreadRecord>,
}

impl SpreadTable {
    pub fn records(&self) -> &[SpreadRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn spreads_for(&self, group: MarketGroup) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.group == group)
            .map(|r| r.spread_pct)
            .collect()
    }

    pub fn count(&self, group: MarketGroup) -> usize {
        self.records.iter().filter(|r| r.group == group).count()
    }

    /// Fraction of records in `group`; 0.0 for an empty table.
    pub fn share(&self, group: MarketGroup) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.count(group) as f64 / self.records.len() as f64
    }
}
