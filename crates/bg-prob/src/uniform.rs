//! Continuous uniform distribution utilities.

use bg_core::{Result, ensure_interval};

/// Check `low < high` with both edges finite.
pub fn check_bounds(low: f64, high: f64) -> Result<()> {
    ensure_interval("uniform bounds", low, high)
}

/// Log-PDF of `Uniform[low, high)` at `x`.
pub fn logpdf(x: f64, low: f64, high: f64) -> Result<f64> {
    check_bounds(low, high)?;
    if x < low || x >= high {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(-(high - low).ln())
}
