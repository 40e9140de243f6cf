//! Error types for bayesgen

use thiserror::Error;

/// bayesgen error type
#[derive(Error, Debug)]
pub enum Error {
    /// A distribution or model parameter is outside its domain
    /// (e.g. a non-positive Beta shape or Normal scale).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed input that is not a distribution parameter
    /// (parameter-vector length, observation values, sweep settings).
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl Error {
    /// Shorthand for the common "must be finite and > 0" parameter check.
    pub fn non_positive(name: &str, value: f64) -> Self {
        Error::InvalidParameter(format!("{} must be finite and > 0, got {}", name, value))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Check that `value` is finite and strictly positive.
pub fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::non_positive(name, value));
    }
    Ok(value)
}

/// Check that `[low, high)` is a non-empty interval with finite edges.
pub fn ensure_interval(name: &str, low: f64, high: f64) -> Result<()> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(Error::InvalidParameter(format!(
            "{} must satisfy finite low < high, got [{}, {})",
            name, low, high
        )));
    }
    Ok(())
}
