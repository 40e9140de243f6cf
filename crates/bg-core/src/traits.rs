//! Core traits for bayesgen
//!
//! The batch evaluator and the likelihood scan only see a model through
//! [`JointLogLikelihood`]; they do not depend on any concrete model crate.

use crate::{Error, Result};

/// A joint log-likelihood over a fixed observation set.
///
/// Implementors bind a prior/likelihood hierarchy to its data. The score is
/// `log prior(params) + Σ log p(obs_i | params)` and may be `-inf` when the
/// density is zero.
pub trait JointLogLikelihood: Send + Sync {
    /// Parameter names, in the order `loglike` expects them.
    fn parameter_names(&self) -> Vec<String>;

    /// Number of parameters.
    fn dim(&self) -> usize {
        self.parameter_names().len()
    }

    /// Joint log-likelihood at `params`.
    fn loglike(&self, params: &[f64]) -> Result<f64>;
}

impl<T: JointLogLikelihood + ?Sized> JointLogLikelihood for &T {
    fn parameter_names(&self) -> Vec<String> {
        (**self).parameter_names()
    }

    fn dim(&self) -> usize {
        (**self).dim()
    }

    fn loglike(&self, params: &[f64]) -> Result<f64> {
        (**self).loglike(params)
    }
}

/// Reject a parameter vector whose length does not match `dim`.
pub fn check_dim(params: &[f64], dim: usize) -> Result<()> {
    if params.len() != dim {
        return Err(Error::Validation(format!(
            "expected {} parameters, got {}",
            dim,
            params.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat;

    impl JointLogLikelihood for Flat {
        fn parameter_names(&self) -> Vec<String> {
            vec!["x".into(), "y".into()]
        }

        fn loglike(&self, params: &[f64]) -> Result<f64> {
            check_dim(params, self.dim())?;
            Ok(0.0)
        }
    }

    #[test]
    fn test_default_dim() {
        assert_eq!(Flat.dim(), 2);
        assert_eq!((&Flat).dim(), 2);
    }

    #[test]
    fn test_check_dim() {
        assert!(Flat.loglike(&[1.0, 2.0]).is_ok());
        assert!(matches!(Flat.loglike(&[1.0]), Err(Error::Validation(_))));
    }
}
