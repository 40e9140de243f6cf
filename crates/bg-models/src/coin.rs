//! Coin-flip model: Beta prior on the heads probability, Bernoulli flips.
//!
//! ```text
//! p ~ Beta(a, b)
//! y ~ Bernoulli(p)
//! ```

use bg_core::traits::check_dim;
use bg_core::{Error, JointLogLikelihood, Result};
use bg_prob::{Distribution, bernoulli, beta};
use rand::Rng;

use crate::generative::{GenerativeModel, check_not_nan};

/// Beta–Bernoulli coin model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinFlipModel {
    a: f64,
    b: f64,
}

impl CoinFlipModel {
    /// Create a model with prior `Beta(a, b)`. Both shapes must be `> 0`.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        beta::check_shapes(a, b)?;
        Ok(Self { a, b })
    }

    /// Prior shape parameters `(a, b)`.
    pub fn prior_shapes(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    /// The prior on `p`.
    pub fn prior(&self) -> Distribution {
        Distribution::Beta { a: self.a, b: self.b }
    }

    /// Draw `p` from the prior.
    pub fn simulate_parameter<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        self.prior().sample(rng)
    }

    /// `log Beta(p; a, b) + Σ log Bernoulli(obs_i; p)`.
    ///
    /// `p` outside `[0, 1]` has zero prior density and scores `-inf`.
    pub fn binary_joint_loglike(&self, observations: &[u8], p: f64) -> Result<f64> {
        check_binary(observations)?;
        check_not_nan("p", p)?;
        let lp_prior = beta::logpdf(p, self.a, self.b)?;
        if lp_prior == f64::NEG_INFINITY {
            return Ok(f64::NEG_INFINITY);
        }
        let ll = bernoulli::sum_logpmf(observations, p)?;
        if ll == f64::NEG_INFINITY {
            return Ok(f64::NEG_INFINITY);
        }
        Ok(lp_prior + ll)
    }

    /// Product-space joint likelihood `Beta.pdf(p) × Π Bernoulli.pmf(obs_i; p)`.
    ///
    /// Underflows to `0.0` for long observation sequences; prefer
    /// [`Self::binary_joint_loglike`].
    pub fn binary_joint_likelihood(&self, observations: &[u8], p: f64) -> Result<f64> {
        check_binary(observations)?;
        check_not_nan("p", p)?;
        let prior = beta::pdf(p, self.a, self.b)?;
        if prior == 0.0 {
            return Ok(0.0);
        }
        let mut lik = prior;
        for &k in observations {
            lik *= bernoulli::pmf(k, p)?;
        }
        Ok(lik)
    }

    /// Bind the model to a fixed observation set.
    pub fn with_observations(self, observations: Vec<u8>) -> Result<CoinFlipLikelihood> {
        check_binary(&observations)?;
        Ok(CoinFlipLikelihood { model: self, observations })
    }
}

impl Default for CoinFlipModel {
    /// `Beta(10, 10)`: a prior concentrated around a fair coin.
    fn default() -> Self {
        Self { a: 10.0, b: 10.0 }
    }
}

impl GenerativeModel for CoinFlipModel {
    type Draw = u8;

    fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<u8> {
        let p = self.simulate_parameter(rng)?;
        let y = Distribution::bernoulli(p)?.sample(rng)?;
        Ok(y as u8)
    }
}

/// Draw `p ~ Beta(a, b)` then `y ~ Bernoulli(p)`.
pub fn simulate_binary_outcome<R: Rng + ?Sized>(a: f64, b: f64, rng: &mut R) -> Result<u8> {
    CoinFlipModel::new(a, b)?.simulate(rng)
}

fn check_binary(observations: &[u8]) -> Result<()> {
    if let Some((i, &k)) = observations.iter().enumerate().find(|&(_, &k)| k > 1) {
        return Err(Error::Validation(format!("observation[{}] must be 0 or 1, got {}", i, k)));
    }
    Ok(())
}

/// [`CoinFlipModel`] bound to its flips; parameters `[p]`.
#[derive(Debug, Clone)]
pub struct CoinFlipLikelihood {
    model: CoinFlipModel,
    observations: Vec<u8>,
}

impl CoinFlipLikelihood {
    /// The underlying model.
    pub fn model(&self) -> &CoinFlipModel {
        &self.model
    }

    /// The bound observations.
    pub fn observations(&self) -> &[u8] {
        &self.observations
    }
}

impl JointLogLikelihood for CoinFlipLikelihood {
    fn parameter_names(&self) -> Vec<String> {
        vec!["p".into()]
    }

    fn dim(&self) -> usize {
        1
    }

    fn loglike(&self, params: &[f64]) -> Result<f64> {
        check_dim(params, 1)?;
        self.model.binary_joint_loglike(&self.observations, params[0])
    }
}
