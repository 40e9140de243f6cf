//! Crash-count model: Exponential prior on the rate, Poisson counts.
//!
//! ```text
//! rate  ~ Exponential(scale = rate_scale)
//! count ~ Poisson(rate)
//! ```

use bg_core::traits::check_dim;
use bg_core::{JointLogLikelihood, Result, ensure_positive};
use bg_prob::{Distribution, exponential, poisson};
use rand::Rng;

use crate::generative::{GenerativeModel, check_not_nan};

/// Exponential–Poisson count model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrashCountModel {
    rate_scale: f64,
}

impl CrashCountModel {
    /// Create a model whose rate prior has mean `rate_scale` (> 0).
    pub fn new(rate_scale: f64) -> Result<Self> {
        ensure_positive("rate_scale", rate_scale)?;
        Ok(Self { rate_scale })
    }

    /// Prior scale of the rate.
    pub fn rate_scale(&self) -> f64 {
        self.rate_scale
    }

    /// The prior on the rate.
    pub fn prior(&self) -> Distribution {
        Distribution::Exponential { scale: self.rate_scale }
    }

    /// Draw a rate from the prior.
    pub fn simulate_parameter<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        self.prior().sample(rng)
    }

    /// `log Exponential(rate; rate_scale) + Σ log Poisson(count_i; rate)`.
    ///
    /// Negative rates have zero prior density and score `-inf`.
    pub fn count_joint_loglike(&self, rate: f64, counts: &[u64]) -> Result<f64> {
        check_not_nan("rate", rate)?;
        let lp_prior = exponential::logpdf_scale(rate, self.rate_scale)?;
        if lp_prior == f64::NEG_INFINITY {
            return Ok(f64::NEG_INFINITY);
        }
        Ok(lp_prior + poisson::sum_logpmf(counts, rate)?)
    }

    /// Bind the model to a fixed set of counts.
    pub fn with_counts(self, counts: Vec<u64>) -> CrashCountLikelihood {
        CrashCountLikelihood { model: self, counts }
    }
}

impl Default for CrashCountModel {
    /// Rate prior with mean 1 event per period.
    fn default() -> Self {
        Self { rate_scale: 1.0 }
    }
}

impl GenerativeModel for CrashCountModel {
    type Draw = u64;

    fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<u64> {
        let rate = self.simulate_parameter(rng)?;
        let count = Distribution::poisson(rate)?.sample(rng)?;
        Ok(count as u64)
    }
}

/// Draw `rate ~ Exponential(scale = rate_scale)` then `count ~ Poisson(rate)`.
pub fn simulate_count<R: Rng + ?Sized>(rate_scale: f64, rng: &mut R) -> Result<u64> {
    CrashCountModel::new(rate_scale)?.simulate(rng)
}

/// [`CrashCountModel`] bound to its counts; parameters `[rate]`.
#[derive(Debug, Clone)]
pub struct CrashCountLikelihood {
    model: CrashCountModel,
    counts: Vec<u64>,
}

impl CrashCountLikelihood {
    /// The underlying model.
    pub fn model(&self) -> &CrashCountModel {
        &self.model
    }

    /// The bound counts.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}

impl JointLogLikelihood for CrashCountLikelihood {
    fn parameter_names(&self) -> Vec<String> {
        vec!["rate".into()]
    }

    fn dim(&self) -> usize {
        1
    }

    fn loglike(&self, params: &[f64]) -> Result<f64> {
        check_dim(params, 1)?;
        self.model.count_joint_loglike(params[0], &self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bg_core::Error;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use statrs::distribution::{Continuous, Discrete, Exp, Poisson};

    #[test]
    fn test_invalid_scale() {
        assert!(matches!(CrashCountModel::new(0.0), Err(Error::InvalidParameter(_))));
        assert!(matches!(CrashCountModel::new(-2.0), Err(Error::InvalidParameter(_))));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(simulate_count(-1.0, &mut rng).is_err());
    }

    #[test]
    fn test_matches_reference_densities() {
        let model = CrashCountModel::new(2.0).unwrap();
        let counts = [0u64, 3, 1, 2];
        let rate = 1.4;

        let prior = Exp::new(0.5).unwrap();
        let lik = Poisson::new(rate).unwrap();
        let expected = prior.ln_pdf(rate) + counts.iter().map(|&k| lik.ln_pmf(k)).sum::<f64>();

        let ll = model.count_joint_loglike(rate, &counts).unwrap();
        assert_relative_eq!(ll, expected, epsilon = 1e-10);
    }

    #[test]
    fn test_negative_rate_is_neg_inf() {
        let model = CrashCountModel::default();
        let ll = model.count_joint_loglike(-0.3, &[1, 2]).unwrap();
        assert!(ll.is_infinite() && ll.is_sign_negative());
        assert!(model.count_joint_loglike(f64::NAN, &[1]).is_err());
    }

    #[test]
    fn test_zero_rate() {
        let model = CrashCountModel::default();
        // Only all-zero data is possible under rate 0.
        assert!(model.count_joint_loglike(0.0, &[0, 0]).unwrap().is_finite());
        assert_eq!(model.count_joint_loglike(0.0, &[0, 1]).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_simulated_mean_count() {
        // E[count] = E[rate] = rate_scale.
        let model = CrashCountModel::new(3.0).unwrap();
        let draws = model.simulate_seeded(20_000, 17).unwrap();
        let mean = draws.iter().sum::<u64>() as f64 / draws.len() as f64;
        assert!((mean - 3.0).abs() < 0.15, "mean={}", mean);
    }

    #[test]
    fn test_binding() {
        let lik = CrashCountModel::default().with_counts(vec![2, 0, 1]);
        assert_eq!(lik.dim(), 1);
        assert_eq!(lik.counts(), &[2, 0, 1]);
        assert_eq!(
            lik.loglike(&[0.9]).unwrap(),
            lik.model().count_joint_loglike(0.9, lik.counts()).unwrap()
        );
    }
}
