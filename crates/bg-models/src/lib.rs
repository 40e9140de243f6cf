//! # bg-models
//!
//! Hierarchical generative models and their joint log-likelihoods.
//!
//! Each model comes in two halves that share one prior/likelihood structure:
//! - **generation**: sample hyperparameter → parameter → observation
//!   ([`GenerativeModel`]);
//! - **scoring**: `log prior(params) + Σ log p(obs_i | params)`, always summed
//!   in log space.
//!
//! Binding a model to fixed data (`with_observations`, `with_counts`,
//! `with_measurements`) gives a [`bg_core::JointLogLikelihood`] that the
//! sweep and scan drivers in `bg-sweep` consume.
//!
//! ## Example: coin flips
//!
//! ```rust
//! use bg_models::{CoinFlipModel, GenerativeModel};
//!
//! let model = CoinFlipModel::new(10.0, 10.0).unwrap();
//! let flips = model.simulate_seeded(20, 42).unwrap();
//! assert_eq!(flips.len(), 20);
//!
//! let ll = model.binary_joint_loglike(&[1, 1, 0, 1], 0.3).unwrap();
//! assert!(ll.is_finite());
//! assert_eq!(model.binary_joint_loglike(&[1, 1, 0, 1], 1.5).unwrap(), f64::NEG_INFINITY);
//! ```

#![warn(missing_docs)]

pub mod coin;
pub mod crash;
pub mod generative;
pub mod height;

pub use coin::{CoinFlipLikelihood, CoinFlipModel, simulate_binary_outcome};
pub use crash::{CrashCountLikelihood, CrashCountModel, simulate_count};
pub use generative::GenerativeModel;
pub use height::{
    HeightLikelihood, HeightModel, TwoPopulationHeightModel, TwoPopulationLikelihood,
    simulate_measurement,
};
