//! Poisson distribution utilities.

use bg_core::{Error, Result};
use statrs::function::gamma::ln_gamma;

/// Check that `lambda` is a valid Poisson mean (`lambda >= 0`).
pub fn check_lambda(lambda: f64) -> Result<f64> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "lambda must be finite and >= 0, got {}",
            lambda
        )));
    }
    Ok(lambda)
}

/// Log-PMF of a Poisson distribution with mean `lambda` at count `k`.
///
/// `lambda == 0` is the point mass at zero.
pub fn logpmf(k: u64, lambda: f64) -> Result<f64> {
    check_lambda(lambda)?;
    if lambda == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }
    let kf = k as f64;
    Ok(kf * lambda.ln() - lambda - ln_gamma(kf + 1.0))
}

/// Sum of `logpmf` over `ks`.
pub fn sum_logpmf(ks: &[u64], lambda: f64) -> Result<f64> {
    check_lambda(lambda)?;
    if lambda == 0.0 {
        return Ok(if ks.iter().all(|&k| k == 0) { 0.0 } else { f64::NEG_INFINITY });
    }
    let ln_lambda = lambda.ln();
    let mut lp = 0.0;
    for &k in ks {
        let kf = k as f64;
        lp += kf * ln_lambda - lambda - ln_gamma(kf + 1.0);
    }
    Ok(lp)
}
