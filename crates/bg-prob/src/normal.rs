//! Normal distribution utilities.

use bg_core::{Result, ensure_positive};

/// Natural log of `sqrt(2π)`.
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Log-PDF of a Normal distribution `N(mu, sigma)` at `x`.
///
/// `log p(x) = -0.5 * ((x-mu)/sigma)^2 - ln(sigma) - ln(sqrt(2π))`
pub fn logpdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    ensure_positive("sigma", sigma)?;
    let z = (x - mu) / sigma;
    Ok(-0.5 * z * z - sigma.ln() - LN_SQRT_2PI)
}

/// Sum of `logpdf` over `xs`, sharing the normalization term.
pub fn sum_logpdf(xs: &[f64], mu: f64, sigma: f64) -> Result<f64> {
    ensure_positive("sigma", sigma)?;
    let ss: f64 = xs
        .iter()
        .map(|&x| {
            let z = (x - mu) / sigma;
            z * z
        })
        .sum();
    Ok(-0.5 * ss - xs.len() as f64 * (sigma.ln() + LN_SQRT_2PI))
}
