//! Probability building blocks for bayesgen.
//!
//! This crate hosts the distribution primitives the generative models need:
//! - per-family log-density / log-mass functions (`-inf` outside support)
//! - a closed [`Distribution`] enum with `sample` and `log_density`
//!
//! Parameter domain violations surface as `Error::InvalidParameter`.

pub mod bernoulli;
pub mod beta;
pub mod distributions;
pub mod exponential;
pub mod normal;
pub mod poisson;
pub mod uniform;

pub use distributions::Distribution;
