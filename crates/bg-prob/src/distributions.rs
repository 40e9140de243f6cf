//! Closed set of distribution families used by the generative models.
//!
//! Each variant carries its own parameters and exposes the two operations the
//! models need: `sample` (via `rand_distr`) and `log_density` (via the
//! per-family modules in this crate). Values outside the support score `-inf`;
//! out-of-domain parameters are rejected at construction.

use std::fmt;

use bg_core::{Error, Result, ensure_positive};
use rand::Rng;
use rand::distr::{Bernoulli as RandBernoulli, Uniform as RandUniform};
use rand_distr::{
    Beta as RandBeta, Distribution as Sampler, Exp as RandExp, Normal as RandNormal,
    Poisson as RandPoisson,
};

/// A distribution family with validated parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Beta(a, b), `a > 0`, `b > 0`.
    Beta {
        /// First shape parameter.
        a: f64,
        /// Second shape parameter.
        b: f64,
    },
    /// Bernoulli(p), `0 <= p <= 1`. Outcomes are `0.0` / `1.0`.
    Bernoulli {
        /// Success probability.
        p: f64,
    },
    /// Exponential with `scale > 0` (mean `scale`, rate `1/scale`).
    Exponential {
        /// Scale (mean).
        scale: f64,
    },
    /// Poisson(mean), `mean >= 0`. Outcomes are non-negative integers as `f64`.
    Poisson {
        /// Mean count.
        mean: f64,
    },
    /// Normal(loc, scale), `scale > 0`.
    Normal {
        /// Location (mean).
        loc: f64,
        /// Scale (standard deviation).
        scale: f64,
    },
    /// Uniform on `[low, high)`.
    Uniform {
        /// Inclusive lower edge.
        low: f64,
        /// Exclusive upper edge.
        high: f64,
    },
}

fn invalid<E: fmt::Display>(family: &'static str) -> impl FnOnce(E) -> Error {
    move |e| Error::InvalidParameter(format!("{}: {}", family, e))
}

impl Distribution {
    /// Beta(a, b).
    pub fn beta(a: f64, b: f64) -> Result<Self> {
        crate::beta::check_shapes(a, b)?;
        Ok(Self::Beta { a, b })
    }

    /// Bernoulli(p).
    pub fn bernoulli(p: f64) -> Result<Self> {
        crate::bernoulli::check_p(p)?;
        Ok(Self::Bernoulli { p })
    }

    /// Exponential with the given scale (`1/rate`).
    pub fn exponential(scale: f64) -> Result<Self> {
        ensure_positive("scale", scale)?;
        Ok(Self::Exponential { scale })
    }

    /// Poisson with the given mean.
    pub fn poisson(mean: f64) -> Result<Self> {
        crate::poisson::check_lambda(mean)?;
        Ok(Self::Poisson { mean })
    }

    /// Normal(loc, scale).
    pub fn normal(loc: f64, scale: f64) -> Result<Self> {
        if !loc.is_finite() {
            return Err(Error::InvalidParameter(format!("loc must be finite, got {}", loc)));
        }
        ensure_positive("scale", scale)?;
        Ok(Self::Normal { loc, scale })
    }

    /// Uniform on `[low, high)`.
    pub fn uniform(low: f64, high: f64) -> Result<Self> {
        crate::uniform::check_bounds(low, high)?;
        Ok(Self::Uniform { low, high })
    }

    /// Re-check the parameters (variants can be built directly).
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Beta { a, b } => Self::beta(a, b).map(|_| ()),
            Self::Bernoulli { p } => Self::bernoulli(p).map(|_| ()),
            Self::Exponential { scale } => Self::exponential(scale).map(|_| ()),
            Self::Poisson { mean } => Self::poisson(mean).map(|_| ()),
            Self::Normal { loc, scale } => Self::normal(loc, scale).map(|_| ()),
            Self::Uniform { low, high } => Self::uniform(low, high).map(|_| ()),
        }
    }

    /// Family name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beta { .. } => "Beta",
            Self::Bernoulli { .. } => "Bernoulli",
            Self::Exponential { .. } => "Exponential",
            Self::Poisson { .. } => "Poisson",
            Self::Normal { .. } => "Normal",
            Self::Uniform { .. } => "Uniform",
        }
    }

    /// True for the count/binary families.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Bernoulli { .. } | Self::Poisson { .. })
    }

    /// Draw one variate.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        match *self {
            Self::Beta { a, b } => {
                let d = RandBeta::new(a, b).map_err(invalid("Beta"))?;
                Ok(d.sample(rng))
            }
            Self::Bernoulli { p } => {
                let d = RandBernoulli::new(p).map_err(invalid("Bernoulli"))?;
                Ok(if d.sample(rng) { 1.0 } else { 0.0 })
            }
            Self::Exponential { scale } => {
                ensure_positive("scale", scale)?;
                let d = RandExp::new(1.0 / scale).map_err(invalid("Exponential"))?;
                Ok(d.sample(rng))
            }
            Self::Poisson { mean } => {
                crate::poisson::check_lambda(mean)?;
                // Poisson(0) is deterministically 0.
                if mean == 0.0 {
                    return Ok(0.0);
                }
                let d = RandPoisson::new(mean).map_err(invalid("Poisson"))?;
                let k: f64 = d.sample(rng);
                Ok(k)
            }
            Self::Normal { loc, scale } => {
                ensure_positive("scale", scale)?;
                let d = RandNormal::new(loc, scale).map_err(invalid("Normal"))?;
                Ok(d.sample(rng))
            }
            Self::Uniform { low, high } => {
                crate::uniform::check_bounds(low, high)?;
                let d = RandUniform::new(low, high).map_err(invalid("Uniform"))?;
                Ok(d.sample(rng))
            }
        }
    }

    /// Log density (continuous) or log mass (discrete) at `x`.
    ///
    /// Returns `-inf` outside the support rather than an error.
    pub fn log_density(&self, x: f64) -> Result<f64> {
        match *self {
            Self::Beta { a, b } => crate::beta::logpdf(x, a, b),
            Self::Bernoulli { p } => {
                if x == 0.0 {
                    crate::bernoulli::logpmf(0, p)
                } else if x == 1.0 {
                    crate::bernoulli::logpmf(1, p)
                } else {
                    crate::bernoulli::check_p(p)?;
                    Ok(f64::NEG_INFINITY)
                }
            }
            Self::Exponential { scale } => crate::exponential::logpdf_scale(x, scale),
            Self::Poisson { mean } => {
                if x.is_finite() && x >= 0.0 && x.fract() == 0.0 {
                    crate::poisson::logpmf(x as u64, mean)
                } else {
                    crate::poisson::check_lambda(mean)?;
                    Ok(f64::NEG_INFINITY)
                }
            }
            Self::Normal { loc, scale } => crate::normal::logpdf(x, loc, scale),
            Self::Uniform { low, high } => crate::uniform::logpdf(x, low, high),
        }
    }

    /// Log mass at integer `k` for the discrete families.
    ///
    /// # Errors
    /// `Validation` for continuous families; use [`Self::log_density`].
    pub fn log_mass(&self, k: u64) -> Result<f64> {
        match *self {
            Self::Bernoulli { p } => match k {
                0 | 1 => crate::bernoulli::logpmf(k as u8, p),
                _ => {
                    crate::bernoulli::check_p(p)?;
                    Ok(f64::NEG_INFINITY)
                }
            },
            Self::Poisson { mean } => crate::poisson::logpmf(k, mean),
            _ => Err(Error::Validation(format!("{} has no probability mass function", self))),
        }
    }

    /// Density / mass at `x` (product-space counterpart of [`Self::log_density`]).
    pub fn density(&self, x: f64) -> Result<f64> {
        Ok(self.log_density(x)?.exp())
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beta { a, b } => write!(f, "Beta(a={}, b={})", a, b),
            Self::Bernoulli { p } => write!(f, "Bernoulli(p={})", p),
            Self::Exponential { scale } => write!(f, "Exponential(scale={})", scale),
            Self::Poisson { mean } => write!(f, "Poisson(mean={})", mean),
            Self::Normal { loc, scale } => write!(f, "Normal(loc={}, scale={})", loc, scale),
            Self::Uniform { low, high } => write!(f, "Uniform[{}, {})", low, high),
        }
    }
}
