//! Hypothesis tests: Pearson correlation and Welch's unequal-variance
//! t-test, both with two-tailed p-values from the Student t distribution.

use crate::error::{StatError, StatResult};
use serde::Serialize;
use statrs::{
    distribution::{ContinuousCDF, StudentsT},
    statistics::Statistics,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlation {
    pub n:                  usize,
    pub r:                  f64,
    pub t_statistic:        f64,
    pub degrees_of_freedom: f64,
    pub p_value:            f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WelchTest {
    pub n_a:                usize,
    pub n_b:                usize,
    pub mean_a:             f64,
    pub mean_b:             f64,
    pub variance_a:         f64,
    pub variance_b:         f64,
    pub t_statistic:        f64,
    pub degrees_of_freedom: f64,
    pub p_value:            f64,
}

/// Pearson's r with the p-value for H0: no correlation.
pub fn pearson(x: &[f64], y: &[f64]) -> StatResult<Correlation> {
    if x.len() != y.len() {
        return Err(StatError::LengthMismatch { left: x.len(), right: y.len() });
    }
    let n = x.len();
    if n < 3 {
        return Err(StatError::InsufficientData { what: "pearson", needed: 3, actual: n });
    }

    let sd_x = x.iter().std_dev();
    let sd_y = y.iter().std_dev();
    if sd_x == 0.0 {
        return Err(StatError::ZeroVariance { what: "pearson x" });
    }
    if sd_y == 0.0 {
        return Err(StatError::ZeroVariance { what: "pearson y" });
    }

    let r = (x.iter().covariance(y.iter()) / (sd_x * sd_y)).clamp(-1.0, 1.0);
    let df = (n - 2) as f64;
    let residual = 1.0 - r * r;
    let (t_statistic, p_value) = if residual <= 0.0 {
        (f64::INFINITY.copysign(r), 0.0)
    } else {
        let t = r * (df / residual).sqrt();
        (t, two_tailed_p(t, df)?)
    };

    log::debug!("pearson: n={n} r={r:.6} t={t_statistic:.6} p={p_value:.6e}");

    Ok(Correlation { n, r, t_statistic, degrees_of_freedom: df, p_value })
}

/// Welch's t-test of mean(a) against mean(b) without assuming equal
/// variances. Degrees of freedom use the Welch–Satterthwaite formula.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> StatResult<WelchTest> {
    let (n_a, n_b) = (a.len(), b.len());
    if n_a < 2 {
        return Err(StatError::InsufficientData { what: "welch group a", needed: 2, actual: n_a });
    }
    if n_b < 2 {
        return Err(StatError::InsufficientData { what: "welch group b", needed: 2, actual: n_b });
    }

    let mean_a = a.iter().mean();
    let mean_b = b.iter().mean();
    let variance_a = a.iter().variance();
    let variance_b = b.iter().variance();

    let se_a = variance_a / n_a as f64;
    let se_b = variance_b / n_b as f64;
    let se2 = se_a + se_b;
    if se2 == 0.0 {
        return Err(StatError::ZeroVariance { what: "welch" });
    }

    let t_statistic = (mean_a - mean_b) / se2.sqrt();
    let degrees_of_freedom =
        se2 * se2 / (se_a * se_a / (n_a - 1) as f64 + se_b * se_b / (n_b - 1) as f64);
    let p_value = two_tailed_p(t_statistic, degrees_of_freedom)?;

    log::debug!(
        "welch: n=({n_a},{n_b}) means=({mean_a:.4},{mean_b:.4}) t={t_statistic:.6} df={degrees_of_freedom:.3} p={p_value:.6e}"
    );

    Ok(WelchTest {
        n_a,
        n_b,
        mean_a,
        mean_b,
        variance_a,
        variance_b,
        t_statistic,
        degrees_of_freedom,
        p_value,
    })
}

/// P(|T| >= |t|) for T ~ Student t with `df` degrees of freedom.
pub fn two_tailed_p(t: f64, df: f64) -> StatResult<f64> {
    if t.is_infinite() {
        return Ok(0.0);
    }
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| StatError::Distribution(e.to_string()))?;
    // sf keeps precision far out in the tail where 1 - cdf would round to 0.
    Ok((2.0 * dist.sf(t.abs())).min(1.0))
}
