//! Beta distribution utilities.

use bg_core::{Result, ensure_positive};
use statrs::function::gamma::ln_gamma;

#[inline]
fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Check both shape parameters (`a > 0`, `b > 0`).
pub fn check_shapes(a: f64, b: f64) -> Result<()> {
    ensure_positive("a", a)?;
    ensure_positive("b", b)?;
    Ok(())
}

/// Log-PDF of a Beta(`a`, `b`) distribution at `x`.
///
/// Support: `0 <= x <= 1`. Outside the support the result is `-inf`.
pub fn logpdf(x: f64, a: f64, b: f64) -> Result<f64> {
    check_shapes(a, b)?;
    if !(0.0..=1.0).contains(&x) {
        return Ok(f64::NEG_INFINITY);
    }

    let ln_norm = -ln_beta(a, b);
    if x == 0.0 {
        if a < 1.0 {
            return Ok(f64::INFINITY);
        }
        if a > 1.0 {
            return Ok(f64::NEG_INFINITY);
        }
        // a == 1: x term is 0.
        return Ok(ln_norm);
    }
    if x == 1.0 {
        if b < 1.0 {
            return Ok(f64::INFINITY);
        }
        if b > 1.0 {
            return Ok(f64::NEG_INFINITY);
        }
        return Ok(ln_norm);
    }

    Ok(ln_norm + (a - 1.0) * x.ln() + (b - 1.0) * (1.0 - x).ln())
}

/// PDF of a Beta(`a`, `b`) distribution at `x`.
pub fn pdf(x: f64, a: f64, b: f64) -> Result<f64> {
    Ok(logpdf(x, a, b)?.exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statrs::distribution::{Beta, Continuous};

    #[test]
    fn test_uniform() {
        for x in [0.0, 0.2, 0.5, 0.9, 1.0] {
            let lp = logpdf(x, 1.0, 1.0).unwrap();
            assert!((lp - 0.0).abs() < 1e-12, "x={}", x);
        }
    }

    #[test]
    fn test_symmetry_when_a_equals_b() {
        let lp1 = logpdf(0.2, 10.0, 10.0).unwrap();
        let lp2 = logpdf(0.8, 10.0, 10.0).unwrap();
        assert!((lp1 - lp2).abs() < 1e-12);
    }

    #[test]
    fn test_matches_statrs() {
        let reference = Beta::new(10.0, 10.0).unwrap();
        for x in [0.05, 0.3, 0.5, 0.77] {
            let d = pdf(x, 10.0, 10.0).unwrap();
            assert_relative_eq!(d, reference.pdf(x), max_relative = 1e-10);
        }
    }

    #[test]
    fn test_out_of_support() {
        for x in [-0.1, 1.1, -5.0] {
            let lp = logpdf(x, 2.0, 3.0).unwrap();
            assert!(lp.is_infinite() && lp.is_sign_negative());
        }
    }

    #[test]
    fn test_invalid_params() {
        assert!(logpdf(0.5, 0.0, 1.0).is_err());
        assert!(logpdf(0.5, 1.0, 0.0).is_err());
        assert!(logpdf(0.5, -2.0, 1.0).is_err());
        assert!(logpdf(0.5, 1.0, f64::NAN).is_err());
    }
}
