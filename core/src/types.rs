//! Shared primitive types used across the study.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seed for every random stream in a study run.
pub type Seed = u64;

/// Market segment a quoted asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketGroup {
    /// Informal "sambung bayar" resale: asset still under finance.
    Shadow,
    /// Clean-title dealer listings.
    Retail,
}

impl MarketGroup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shadow => "Shadow",
            Self::Retail => "Retail",
        }
    }
}

impl fmt::Display for MarketGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One year of the macro sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroObservation {
    pub year:               u16,
    pub sales_growth_pct:   f64,
    pub default_rate_pct:   f64,
}

/// One simulated listing and its discount against fair market value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpreadRecord {
    pub group:      MarketGroup,
    pub spread_pct: f64,
}
