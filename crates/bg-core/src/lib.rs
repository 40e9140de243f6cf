//! # bg-core
//!
//! Shared error type, traits and plain data types for bayesgen.
//!
//! Nothing here samples or evaluates densities; see `bg-prob` for the
//! distribution primitives and `bg-models` for the generative models.

#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result, ensure_interval, ensure_positive};
pub use traits::JointLogLikelihood;
pub use types::{ParamRange, ParameterBounds, ScanPoint, SweepPoint, SweepResult};

/// Crate version, shared by the CLI `version` subcommand.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
