use crate::{
    error::{StatError, StatResult},
    types::{MarketGroup, Seed},
};
use serde::{Deserialize, Serialize};

/// Seed used when neither the config nor the caller picks one.
pub const DEFAULT_SEED: Seed = 42;

/// Largest sample the simulator will allocate for.
pub const MAX_SAMPLE_SIZE: usize = 10_000_000;

/// A market segment the simulator can draw a listing from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketScenario {
    pub group:    MarketGroup,
    pub label:    String,
    /// Fraction below fair market value. Negative means a premium.
    pub discount: f64,
    /// Relative draw weight (market share by scrape frequency).
    pub weight:   f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Unset means "caller decides"; the library falls back to DEFAULT_SEED.
    pub seed:                Option<Seed>,
    pub sample_size:         usize,
    /// Fair market value every ask price is quoted against.
    pub reference_price:     f64,
    /// Negotiation noise band applied multiplicatively to the ask.
    pub noise_low:           f64,
    pub noise_high:          f64,
    pub scenarios:           Vec<MarketScenario>,
    pub macro_significance:  f64,
    pub spread_significance: f64,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            seed:                None,
            sample_size:         200,
            reference_price:     500_000.0,
            noise_low:           0.95,
            noise_high:          1.05,
            scenarios:           vec![
                MarketScenario {
                    group:    MarketGroup::Shadow,
                    label:    "Shadow (Sambung/Lari)".into(),
                    discount: 0.25,
                    weight:   30.0,
                },
                MarketScenario {
                    group:    MarketGroup::Retail,
                    label:    "Retail (Clean Title)".into(),
                    discount: -0.05,
                    weight:   70.0,
                },
            ],
            macro_significance:  0.05,
            spread_significance: 0.01,
        }
    }
}

impl StudyConfig {
    /// Load a study config from a JSON file.
    /// Fields missing from the file keep their default values.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: StudyConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("loaded study config from {path}");
        Ok(config)
    }

    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> Seed {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn validate(&self) -> StatResult<()> {
        if self.sample_size == 0 {
            return Err(StatError::InvalidConfig("sample_size must be > 0".into()));
        }
        if self.sample_size > MAX_SAMPLE_SIZE {
            return Err(StatError::InvalidConfig(format!(
                "sample_size {} exceeds limit {MAX_SAMPLE_SIZE}",
                self.sample_size
            )));
        }
        if !(self.reference_price > 0.0) {
            return Err(StatError::InvalidConfig(format!(
                "reference_price must be positive, got {}",
                self.reference_price
            )));
        }
        if !(self.noise_low > 0.0 && self.noise_low <= self.noise_high) {
            return Err(StatError::InvalidConfig(format!(
                "noise band [{}, {}] is not a positive, ordered range",
                self.noise_low, self.noise_high
            )));
        }
        if self.scenarios.is_empty() {
            return Err(StatError::InvalidConfig("no market scenarios".into()));
        }
        if let Some(s) = self.scenarios.iter().find(|s| !(s.weight > 0.0)) {
            return Err(StatError::InvalidConfig(format!(
                "scenario '{}' has non-positive weight {}",
                s.label, s.weight
            )));
        }
        for (name, alpha) in [
            ("macro_significance", self.macro_significance),
            ("spread_significance", self.spread_significance),
        ] {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(StatError::InvalidConfig(format!(
                    "{name} must lie in (0, 1), got {alpha}"
                )));
            }
        }
        Ok(())
    }

    /// Lowest and highest spread percent a scenario can produce.
    pub fn spread_bounds(&self, scenario: &MarketScenario) -> (f64, f64) {
        let spread = |noise: f64| (1.0 - (1.0 - scenario.discount) * noise) * 100.0;
        let a = spread(self.noise_low);
        let b = spread(self.noise_high);
        (a.min(b), a.max(b))
    }
}
