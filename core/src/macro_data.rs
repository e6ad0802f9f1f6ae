//! The macro sample: luxury sales growth against consumer default rates.
//!
//! Aggregated yearly figures. Growth is the "optics", defaults the
//! "reality"; the correlation check asks whether they move together.

use crate::types::MacroObservation;

pub const MACRO_SAMPLE: [MacroObservation; 6] = [
    MacroObservation { year: 2020, sales_growth_pct:  5.0, default_rate_pct: 2.1 },
    MacroObservation { year: 2021, sales_growth_pct:  8.0, default_rate_pct: 2.3 },
    MacroObservation { year: 2022, sales_growth_pct: 35.0, default_rate_pct: 2.8 },
    MacroObservation { year: 2023, sales_growth_pct: 45.0, default_rate_pct: 3.2 },
    MacroObservation { year: 2024, sales_growth_pct: 60.0, default_rate_pct: 4.5 },
    MacroObservation { year: 2025, sales_growth_pct: 48.0, default_rate_pct: 5.1 },
];

pub fn sales_growth(sample: &[MacroObservation]) -> Vec<f64> {
    sample.iter().map(|o| o.sales_growth_pct).collect()
}

pub fn default_rates(sample: &[MacroObservation]) -> Vec<f64> {
    sample.iter().map(|o| o.default_rate_pct).collect()
}
