//! Common data types for bayesgen

use serde::{Deserialize, Serialize};

use crate::{Error, Result, ensure_interval};

/// Uniform sampling interval `[low, high)` for one named parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    /// Parameter name (must match the model's parameter order).
    pub name: String,
    /// Inclusive lower edge.
    pub low: f64,
    /// Exclusive upper edge.
    pub high: f64,
}

impl ParamRange {
    /// Create a range, rejecting non-finite edges and empty intervals.
    pub fn new(name: impl Into<String>, low: f64, high: f64) -> Result<Self> {
        let range = Self { name: name.into(), low, high };
        range.validate()?;
        Ok(range)
    }

    /// Check `low < high` with both edges finite.
    pub fn validate(&self) -> Result<()> {
        ensure_interval(&format!("range '{}'", self.name), self.low, self.high)
    }

    /// Interval midpoint.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Interval width.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Ordered bounding box for a parameter sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterBounds {
    ranges: Vec<ParamRange>,
}

impl ParameterBounds {
    /// Build from ranges, validating each one and rejecting duplicate names.
    pub fn new(ranges: Vec<ParamRange>) -> Result<Self> {
        let bounds = Self { ranges };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Validate every range and name uniqueness.
    pub fn validate(&self) -> Result<()> {
        for (i, r) in self.ranges.iter().enumerate() {
            r.validate()?;
            if self.ranges[..i].iter().any(|o| o.name == r.name) {
                return Err(Error::Validation(format!("duplicate parameter range '{}'", r.name)));
            }
        }
        Ok(())
    }

    /// Ranges in parameter order.
    pub fn ranges(&self) -> &[ParamRange] {
        &self.ranges
    }

    /// Parameter names in order.
    pub fn names(&self) -> Vec<String> {
        self.ranges.iter().map(|r| r.name.clone()).collect()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True if no ranges are present.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Require the names to equal `expected`, in order.
    pub fn check_names(&self, expected: &[String]) -> Result<()> {
        let names = self.names();
        if names != expected {
            return Err(Error::Validation(format!(
                "bounds must cover parameters {:?} in order, got {:?}",
                expected, names
            )));
        }
        Ok(())
    }
}

/// One evaluated parameter vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Sampled parameter vector.
    pub params: Vec<f64>,
    /// Joint log-likelihood (non-finite when outside support).
    ///
    /// JSON has no `-inf`; non-finite scores serialize as `null` and read
    /// back as `-inf`.
    #[serde(with = "nullable_score")]
    pub score: f64,
}

/// Output of a Monte Carlo parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Parameter names, one per column of `points[i].params`.
    pub parameter_names: Vec<String>,
    /// Evaluated points in draw order.
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Create a new sweep result
    pub fn new(parameter_names: Vec<String>, points: Vec<SweepPoint>) -> Self {
        Self { parameter_names, points }
    }

    /// Number of points with a finite score.
    pub fn n_finite(&self) -> usize {
        self.points.iter().filter(|p| p.score.is_finite()).count()
    }

    /// Highest-scoring finite point. `None` if every score is non-finite.
    pub fn best(&self) -> Option<&SweepPoint> {
        self.points
            .iter()
            .filter(|p| p.score.is_finite())
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }

    /// All sampled values of parameter `i`. `None` if `i` is out of range for
    /// the names or for any point.
    pub fn column(&self, i: usize) -> Option<Vec<f64>> {
        if i >= self.parameter_names.len() {
            return None;
        }
        self.points.iter().map(|p| p.params.get(i).copied()).collect()
    }

    /// Scores in draw order.
    pub fn scores(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.score).collect()
    }
}

/// One point of a 1-D likelihood scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanPoint {
    /// Value of the scanned parameter.
    pub value: f64,
    /// Joint log-likelihood with the other parameters held fixed.
    #[serde(with = "nullable_score")]
    pub score: f64,
}

/// Scores as JSON numbers, with `null` standing in for the non-finite
/// (out-of-support) case.
mod nullable_score {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(score: &f64, s: S) -> Result<S::Ok, S::Error> {
        if score.is_finite() { s.serialize_f64(*score) } else { s.serialize_none() }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NEG_INFINITY))
    }
}
