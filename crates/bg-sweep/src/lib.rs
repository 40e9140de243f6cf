//! # bg-sweep
//!
//! Batch evaluation of joint log-likelihoods:
//! - [`sweep`]: Monte Carlo uniform sweep over parameter bounds, sequential
//!   or Rayon-parallel with reproducible per-draw seeding;
//! - [`scan`]: deterministic one-parameter grid slices.

#![warn(missing_docs)]

pub mod scan;
pub mod sweep;

pub use scan::{linspace, scan, scan_by_name};
pub use sweep::{FnLikelihood, sweep, sweep_parallel, sweep_seeded};
