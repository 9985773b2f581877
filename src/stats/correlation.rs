//! Correlation Module
//! Pearson correlation over paired per-continent means.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Pearson correlation with a two-tailed significance estimate.
#[derive(Debug, Clone)]
pub struct Correlation {
    pub r: f64,
    pub p_value: Option<f64>,
    pub n: usize,
}

/// Pairwise-complete Pearson correlation.
///
/// Pairs with a missing (or NaN) value on either side are dropped. Returns
/// `None` when fewer than two complete pairs remain or either side has zero
/// variance, so degenerate input never divides by zero.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<Correlation> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => Some((*a, *b)),
            _ => None,
        })
        .collect();

    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n as f64;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);
    Some(Correlation {
        r,
        p_value: p_value(r, n),
        n,
    })
}

/// Two-tailed p-value from the t-distribution with n - 2 degrees of
/// freedom. Undefined for fewer than three pairs or |r| = 1.
fn p_value(r: f64, n: usize) -> Option<f64> {
    if n < 3 || r.abs() >= 1.0 {
        return None;
    }
    let df = (n - 2) as f64;
    let t = r * (df / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    Some(2.0 * (1.0 - dist.cdf(t.abs())))
}
