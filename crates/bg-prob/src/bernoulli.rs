//! Bernoulli distribution utilities.

use bg_core::{Error, Result};

/// Check that `p` is a valid success probability.
pub fn check_p(p: f64) -> Result<f64> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!("p must be finite and in [0,1], got {}", p)));
    }
    Ok(p)
}

/// Log-PMF of a Bernoulli distribution at `k ∈ {0, 1}` with success probability `p`.
pub fn logpmf(k: u8, p: f64) -> Result<f64> {
    check_p(p)?;
    match k {
        0 => Ok((1.0 - p).ln()),
        1 => Ok(p.ln()),
        _ => Err(Error::Validation(format!("k must be 0 or 1, got {}", k))),
    }
}

/// PMF of a Bernoulli distribution at `k`.
pub fn pmf(k: u8, p: f64) -> Result<f64> {
    check_p(p)?;
    match k {
        0 => Ok(1.0 - p),
        1 => Ok(p),
        _ => Err(Error::Validation(format!("k must be 0 or 1, got {}", k))),
    }
}

/// Sum of `logpmf` over a sequence of 0/1 outcomes.
///
/// Equivalent to `n1 * ln(p) + n0 * ln(1-p)`; the counts are taken first so
/// degenerate `p` only produces `-inf` when the offending outcome is present.
pub fn sum_logpmf(ks: &[u8], p: f64) -> Result<f64> {
    check_p(p)?;
    let mut n1 = 0usize;
    for &k in ks {
        match k {
            0 => {}
            1 => n1 += 1,
            _ => return Err(Error::Validation(format!("k must be 0 or 1, got {}", k))),
        }
    }
    let n0 = ks.len() - n1;
    let mut lp = 0.0;
    if n1 > 0 {
        lp += n1 as f64 * p.ln();
    }
    if n0 > 0 {
        lp += n0 as f64 * (1.0 - p).ln();
    }
    Ok(lp)
}
