//! Model + data + bounds configuration for the `loglike`, `sweep` and `scan` commands.
//!
//! Read from JSON (`.json`) or YAML (anything else), selected by extension.

use std::path::Path;

use bg_core::{Error, JointLogLikelihood, ParameterBounds, Result};
use bg_models::{CoinFlipModel, CrashCountModel, HeightModel, TwoPopulationHeightModel};
use serde::{Deserialize, Serialize};

/// Which model to score, with its prior hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Coin {
        #[serde(default = "default_shape")]
        a: f64,
        #[serde(default = "default_shape")]
        b: f64,
    },
    Crash {
        #[serde(default = "default_rate_scale")]
        rate_scale: f64,
    },
    Height(HeightPrior),
    TwoPopulationHeight(HeightPrior),
}

impl ModelSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelSpec::Coin { .. } => "coin",
            ModelSpec::Crash { .. } => "crash",
            ModelSpec::Height(_) => "height",
            ModelSpec::TwoPopulationHeight(_) => "two_population_height",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightPrior {
    #[serde(default = "default_mean_loc")]
    pub mean_loc: f64,
    #[serde(default = "default_mean_scale")]
    pub mean_scale: f64,
    #[serde(default = "default_spread_scale")]
    pub spread_scale: f64,
}

impl HeightPrior {
    fn model(&self) -> Result<HeightModel> {
        HeightModel::new(self.mean_loc, self.mean_scale, self.spread_scale)
    }
}

/// Fixed observations. Only the fields the model kind uses are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSpec {
    /// Coin flips (0/1).
    #[serde(default)]
    pub observations: Vec<u8>,
    /// Crash counts.
    #[serde(default)]
    pub counts: Vec<u64>,
    /// Single-population heights.
    #[serde(default)]
    pub measurements: Vec<f64>,
    /// Two-population heights, population A.
    #[serde(default)]
    pub a: Vec<f64>,
    /// Two-population heights, population B.
    #[serde(default)]
    pub b: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub model: ModelSpec,
    #[serde(default)]
    pub data: DataSpec,
    #[serde(default)]
    pub bounds: ParameterBounds,
    #[serde(default = "default_n_draws")]
    pub n_draws: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Threads (0 = auto).
    #[serde(default = "default_threads")]
    pub threads: usize,
}

impl SweepConfig {
    /// Bind the configured model to its data.
    pub fn likelihood(&self) -> Result<Box<dyn JointLogLikelihood>> {
        let d = &self.data;
        let lik: Box<dyn JointLogLikelihood> = match &self.model {
            ModelSpec::Coin { a, b } => {
                Box::new(CoinFlipModel::new(*a, *b)?.with_observations(d.observations.clone())?)
            }
            ModelSpec::Crash { rate_scale } => {
                Box::new(CrashCountModel::new(*rate_scale)?.with_counts(d.counts.clone()))
            }
            ModelSpec::Height(prior) => {
                Box::new(prior.model()?.with_measurements(d.measurements.clone())?)
            }
            ModelSpec::TwoPopulationHeight(prior) => Box::new(
                TwoPopulationHeightModel::shared(prior.model()?)
                    .with_measurements(d.a.clone(), d.b.clone())?,
            ),
        };
        Ok(lik)
    }

    /// Bounds must be present and line up with the model's parameters.
    pub fn checked_bounds(&self, lik: &dyn JointLogLikelihood) -> Result<&ParameterBounds> {
        if self.bounds.is_empty() {
            return Err(Error::Validation(format!(
                "config has no bounds; expected ranges for {:?}",
                lik.parameter_names()
            )));
        }
        self.bounds.validate()?;
        self.bounds.check_names(&lik.parameter_names())?;
        Ok(&self.bounds)
    }
}

pub fn read_config(path: &Path) -> Result<SweepConfig> {
    let bytes = std::fs::read(path)?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
    let cfg: SweepConfig = if ext == "json" {
        serde_json::from_slice(&bytes)?
    } else {
        // Default: YAML (serde_yaml_ng).
        serde_yaml_ng::from_slice(&bytes)?
    };
    Ok(cfg)
}

fn default_shape() -> f64 {
    10.0
}

fn default_rate_scale() -> f64 {
    1.0
}

fn default_mean_loc() -> f64 {
    170.0
}

fn default_mean_scale() -> f64 {
    10.0
}

fn default_spread_scale() -> f64 {
    5.0
}

fn default_n_draws() -> usize {
    2000
}

fn default_seed() -> u64 {
    42
}

fn default_threads() -> usize {
    1
}
