//! Shared simulation interface for the generative chains.

use bg_core::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A hierarchical model that can simulate one observation per call.
///
/// Calls are independent trials: nothing is cached between them, and the
/// only shared state is whatever RNG the caller passes in.
pub trait GenerativeModel {
    /// One simulated observation.
    type Draw: Clone + Send;

    /// Simulate one observation by sampling the whole hierarchy.
    fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Draw>;

    /// `n` i.i.d. observations from one RNG.
    fn simulate_many<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Self::Draw>> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.simulate(rng)?);
        }
        Ok(out)
    }

    /// `n` i.i.d. observations from `StdRng::seed_from_u64(seed)`.
    ///
    /// Same `(n, seed)` → same sequence.
    fn simulate_seeded(&self, n: usize, seed: u64) -> Result<Vec<Self::Draw>> {
        let mut rng = StdRng::seed_from_u64(seed);
        log::debug!("simulating {} draws (seed={})", n, seed);
        self.simulate_many(&mut rng, n)
    }
}

/// Reject NaN parameter values; everything else is scored.
pub(crate) fn check_not_nan(name: &str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(Error::Validation(format!("{} must not be NaN", name)));
    }
    Ok(())
}
