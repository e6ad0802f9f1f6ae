//! Console rendering of a StudyReport.
//!
//! Pure: builds lines, never prints. The runner owns stdout.

use crate::study::{MacroReport, SpreadReport, StudyReport};

pub const BANNER: &str = ">>> [INIT] LOADING STATISTICAL MODULE...";

pub const MACRO_SIGNIFICANT: &str =
    "VERDICT: STATISTICALLY SIGNIFICANT LINK between Sales & Defaults.";
pub const MACRO_NOT_SIGNIFICANT: &str = "VERDICT: No significant link found.";
pub const SPREAD_SIGNIFICANT: &str = "VERDICT: The 'Shadow Premium' is REAL (Conf > 99%).";
pub const SPREAD_NOT_SIGNIFICANT: &str = "VERDICT: Difference could be random chance.";

pub fn render(report: &StudyReport) -> Vec<String> {
    let mut lines = vec![BANNER.to_string()];
    lines.extend(render_macro(&report.macro_test));
    lines.push("-".repeat(50));
    lines.extend(render_spread(&report.spread_test));
    lines
}

pub fn render_macro(report: &MacroReport) -> Vec<String> {
    let verdict = if report.significant { MACRO_SIGNIFICANT } else { MACRO_NOT_SIGNIFICANT };
    vec![
        String::new(),
        ">>> [MACRO] HYPOTHESIS TEST RESULTS".into(),
        format!("Correlation (r): {:.4}", report.correlation.r),
        format!("P-Value: {:.4}", report.correlation.p_value),
        verdict.into(),
    ]
}

pub fn render_spread(report: &SpreadReport) -> Vec<String> {
    let verdict = if report.significant { SPREAD_SIGNIFICANT } else { SPREAD_NOT_SIGNIFICANT };
    vec![
        String::new(),
        ">>> [MICRO] ALPHA VALIDATION".into(),
        format!("Mean Shadow Spread: {:.2}%", report.mean_shadow()),
        format!("Mean Retail Spread: {:.2}%", report.mean_retail()),
        format!("T-Statistic: {:.4}", report.welch.t_statistic),
        format!("P-Value: {}", scientific(report.welch.p_value)),
        verdict.into(),
    ]
}

/// Four-digit scientific notation with a signed, two-digit exponent
/// (`3.1828e-02`), matching the usual C printf layout.
pub fn scientific(x: f64) -> String {
    let raw = format!("{x:.4e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", e.unsigned_abs())
            }
            Err(_) => raw,
        },
        // inf / NaN carry no exponent; printf spells them lower-case
        None => raw.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::scientific;

    #[test]
    fn scientific_pads_exponent() {
        assert_eq!(scientific(0.031828), "3.1828e-02");
        assert_eq!(scientific(1.5e-120), "1.5000e-120");
        assert_eq!(scientific(12345.0), "1.2345e+04");
        assert_eq!(scientific(0.0), "0.0000e+00");
    }

    #[test]
    fn scientific_lowercases_non_finite() {
        assert_eq!(scientific(f64::NAN), "nan");
        assert_eq!(scientific(f64::INFINITY), "inf");
        assert_eq!(scientific(f64::NEG_INFINITY), "-inf");
    }
}
