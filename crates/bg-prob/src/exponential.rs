//! Exponential distribution utilities.
//!
//! The low-level functions take a rate. Everything model-facing in bayesgen
//! is parameterized by scale (`scale = 1 / rate`), via [`logpdf_scale`].

use bg_core::{Result, ensure_positive};

/// Log-PDF of an Exponential distribution at `x` with rate `rate`.
///
/// Support: `x >= 0`.
pub fn logpdf(x: f64, rate: f64) -> Result<f64> {
    ensure_positive("rate", rate)?;
    if x < 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(rate.ln() - rate * x)
}

/// Log-PDF of an Exponential distribution at `x` with `scale` (mean).
pub fn logpdf_scale(x: f64, scale: f64) -> Result<f64> {
    ensure_positive("scale", scale)?;
    logpdf(x, 1.0 / scale)
}
