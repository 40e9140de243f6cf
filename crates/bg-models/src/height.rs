//! Height model: Normal prior on the mean, Exponential prior on the spread,
//! Normal measurements. Two independent populations combine by summation.
//!
//! ```text
//! mean   ~ Normal(mean_loc, mean_scale)
//! spread ~ Exponential(scale = spread_scale)
//! value  ~ Normal(mean, spread)
//! ```

use bg_core::traits::check_dim;
use bg_core::{Error, JointLogLikelihood, Result, ensure_positive};
use bg_prob::{Distribution, exponential, normal};
use rand::Rng;

use crate::generative::{GenerativeModel, check_not_nan};

/// Normal–Exponential–Normal measurement model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightModel {
    mean_loc: f64,
    mean_scale: f64,
    spread_scale: f64,
}

impl HeightModel {
    /// Create a model. `mean_scale` and `spread_scale` must be `> 0`.
    pub fn new(mean_loc: f64, mean_scale: f64, spread_scale: f64) -> Result<Self> {
        if !mean_loc.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "mean_loc must be finite, got {}",
                mean_loc
            )));
        }
        ensure_positive("mean_scale", mean_scale)?;
        ensure_positive("spread_scale", spread_scale)?;
        Ok(Self { mean_loc, mean_scale, spread_scale })
    }

    /// Prior location of the mean.
    pub fn mean_loc(&self) -> f64 {
        self.mean_loc
    }

    /// Prior scale of the mean.
    pub fn mean_scale(&self) -> f64 {
        self.mean_scale
    }

    /// Prior scale of the spread.
    pub fn spread_scale(&self) -> f64 {
        self.spread_scale
    }

    /// Prior on the mean.
    pub fn mean_prior(&self) -> Distribution {
        Distribution::Normal { loc: self.mean_loc, scale: self.mean_scale }
    }

    /// Prior on the spread.
    pub fn spread_prior(&self) -> Distribution {
        Distribution::Exponential { scale: self.spread_scale }
    }

    /// Draw `(mean, spread)` from the priors.
    pub fn simulate_parameter<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(f64, f64)> {
        let mean = self.mean_prior().sample(rng)?;
        let spread = self.spread_prior().sample(rng)?;
        Ok((mean, spread))
    }

    /// Joint log-likelihood of one population:
    ///
    /// ```text
    /// log N(mean; mean_loc, mean_scale) + log Exp(scale; spread_scale) + Σ log N(x_i; mean, scale)
    /// ```
    ///
    /// # Errors
    /// `InvalidParameter` if `scale <= 0` (the measurement Normal is undefined);
    /// `Validation` for a NaN mean or non-finite measurements.
    pub fn measurement_joint_loglike(
        &self,
        mean: f64,
        scale: f64,
        measurements: &[f64],
    ) -> Result<f64> {
        check_not_nan("mean", mean)?;
        ensure_positive("scale", scale)?;
        check_finite(measurements)?;

        let lp_mean = normal::logpdf(mean, self.mean_loc, self.mean_scale)?;
        let lp_scale = exponential::logpdf_scale(scale, self.spread_scale)?;
        let ll = normal::sum_logpdf(measurements, mean, scale)?;
        Ok(lp_mean + lp_scale + ll)
    }

    /// Bind the model to a fixed set of measurements.
    pub fn with_measurements(self, measurements: Vec<f64>) -> Result<HeightLikelihood> {
        check_finite(&measurements)?;
        Ok(HeightLikelihood { model: self, measurements })
    }
}

impl GenerativeModel for HeightModel {
    type Draw = f64;

    fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        let (mean, spread) = self.simulate_parameter(rng)?;
        // A zero spread draw collapses the measurement onto the mean.
        if spread == 0.0 {
            return Ok(mean);
        }
        Distribution::normal(mean, spread)?.sample(rng)
    }
}

/// Draw `mean ~ Normal(mean_loc, mean_scale)`, `spread ~ Exponential(spread_scale)`,
/// then `value ~ Normal(mean, spread)`.
pub fn simulate_measurement<R: Rng + ?Sized>(
    mean_loc: f64,
    mean_scale: f64,
    spread_scale: f64,
    rng: &mut R,
) -> Result<f64> {
    HeightModel::new(mean_loc, mean_scale, spread_scale)?.simulate(rng)
}

fn check_finite(measurements: &[f64]) -> Result<()> {
    if let Some((i, &x)) = measurements.iter().enumerate().find(|&(_, x)| !x.is_finite()) {
        return Err(Error::Validation(format!("measurement[{}] must be finite, got {}", i, x)));
    }
    Ok(())
}

/// [`HeightModel`] bound to its measurements; parameters `[mean, scale]`.
#[derive(Debug, Clone)]
pub struct HeightLikelihood {
    model: HeightModel,
    measurements: Vec<f64>,
}

impl HeightLikelihood {
    /// The underlying model.
    pub fn model(&self) -> &HeightModel {
        &self.model
    }

    /// The bound measurements.
    pub fn measurements(&self) -> &[f64] {
        &self.measurements
    }
}

impl JointLogLikelihood for HeightLikelihood {
    fn parameter_names(&self) -> Vec<String> {
        vec!["mean".into(), "scale".into()]
    }

    fn dim(&self) -> usize {
        2
    }

    fn loglike(&self, params: &[f64]) -> Result<f64> {
        check_dim(params, 2)?;
        self.model.measurement_joint_loglike(params[0], params[1], &self.measurements)
    }
}

/// Two independent height populations (e.g. two groups measured separately).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPopulationHeightModel {
    a: HeightModel,
    b: HeightModel,
}

impl TwoPopulationHeightModel {
    /// Populations with their own priors.
    pub fn new(a: HeightModel, b: HeightModel) -> Self {
        Self { a, b }
    }

    /// Both populations share one prior.
    pub fn shared(prior: HeightModel) -> Self {
        Self { a: prior, b: prior }
    }

    /// Model of population A.
    pub fn population_a(&self) -> &HeightModel {
        &self.a
    }

    /// Model of population B.
    pub fn population_b(&self) -> &HeightModel {
        &self.b
    }

    /// Sum of the two single-population joint log-likelihoods (no cross term).
    pub fn combined_measurement_loglike(
        &self,
        mean_a: f64,
        scale_a: f64,
        mean_b: f64,
        scale_b: f64,
        data_a: &[f64],
        data_b: &[f64],
    ) -> Result<f64> {
        let ll_a = self.a.measurement_joint_loglike(mean_a, scale_a, data_a)?;
        let ll_b = self.b.measurement_joint_loglike(mean_b, scale_b, data_b)?;
        Ok(ll_a + ll_b)
    }

    /// One measurement from each population.
    pub fn simulate_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(f64, f64)> {
        Ok((self.a.simulate(rng)?, self.b.simulate(rng)?))
    }

    /// Bind both populations to their measurements.
    pub fn with_measurements(
        self,
        data_a: Vec<f64>,
        data_b: Vec<f64>,
    ) -> Result<TwoPopulationLikelihood> {
        check_finite(&data_a)?;
        check_finite(&data_b)?;
        Ok(TwoPopulationLikelihood { model: self, data_a, data_b })
    }
}

/// [`TwoPopulationHeightModel`] bound to both data sets; parameters
/// `[mean_a, scale_a, mean_b, scale_b]`.
#[derive(Debug, Clone)]
pub struct TwoPopulationLikelihood {
    model: TwoPopulationHeightModel,
    data_a: Vec<f64>,
    data_b: Vec<f64>,
}

impl TwoPopulationLikelihood {
    /// The underlying model.
    pub fn model(&self) -> &TwoPopulationHeightModel {
        &self.model
    }
}

impl JointLogLikelihood for TwoPopulationLikelihood {
    fn parameter_names(&self) -> Vec<String> {
        vec!["mean_a".into(), "scale_a".into(), "mean_b".into(), "scale_b".into()]
    }

    fn dim(&self) -> usize {
        4
    }

    fn loglike(&self, params: &[f64]) -> Result<f64> {
        check_dim(params, 4)?;
        let (data_a, data_b) = (&self.data_a, &self.data_b);
        let (m_a, s_a, m_b, s_b) = (params[0], params[1], params[2], params[3]);
        self.model.combined_measurement_loglike(m_a, s_a, m_b, s_b, data_a, data_b)
    }
}
