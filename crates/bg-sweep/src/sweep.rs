//! Monte Carlo sweep over a joint log-likelihood surface.
//!
//! Each draw samples every parameter independently from `Uniform[low, high)`
//! and scores the resulting vector. Draws never influence one another: there
//! is no chain, no accept/reject, and non-finite scores are kept as-is for the
//! plotting layer to handle.
//!
//! ## Reproducibility
//!
//! - [`sweep`]: caller-owned RNG, sequential.
//! - [`sweep_seeded`]: `StdRng::seed_from_u64(seed)`, sequential.
//! - [`sweep_parallel`]: Rayon, one counter-based RNG per draw. Same seed →
//!   same points in the same order, independent of thread count.

use bg_core::{Error, JointLogLikelihood, ParameterBounds, Result, SweepPoint, SweepResult};
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Counter-based per-draw RNG. Same `(seed, draw)` → same sequence.
#[inline]
fn draw_rng(seed: u64, draw: u64) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_mul(2654435761).wrapping_add(draw))
}

/// Validate inputs and build one uniform sampler per parameter.
fn prepare<L>(n_draws: usize, bounds: &ParameterBounds, loglike: &L) -> Result<Vec<Uniform<f64>>>
where
    L: JointLogLikelihood + ?Sized,
{
    if n_draws == 0 {
        return Err(Error::Validation("n_draws must be > 0".to_string()));
    }
    bounds.validate()?;
    bounds.check_names(&loglike.parameter_names())?;
    bounds
        .ranges()
        .iter()
        .map(|r| {
            Uniform::new(r.low, r.high).map_err(|e| {
                let msg = format!("range '{}' [{}, {}): {}", r.name, r.low, r.high, e);
                Error::InvalidParameter(msg)
            })
        })
        .collect()
}

#[inline]
fn draw_point<R: Rng + ?Sized>(samplers: &[Uniform<f64>], rng: &mut R) -> Vec<f64> {
    samplers.iter().map(|u| u.sample(rng)).collect()
}

fn finish(names: Vec<String>, points: Vec<SweepPoint>) -> SweepResult {
    let result = SweepResult::new(names, points);
    let n_finite = result.n_finite();
    if n_finite == 0 {
        log::warn!("sweep: all {} scores are non-finite; check the bounds", result.points.len());
    } else {
        log::debug!("sweep: {} of {} scores finite", n_finite, result.points.len());
    }
    result
}

/// Sequential sweep with a caller-provided RNG.
///
/// # Errors
/// - `Validation` if `n_draws == 0` or the bound names do not match
///   `loglike.parameter_names()` in order;
/// - `InvalidParameter` for malformed ranges;
/// - any error from `loglike` (the batch fails fast, no partial result).
pub fn sweep<R, L>(
    rng: &mut R,
    n_draws: usize,
    bounds: &ParameterBounds,
    loglike: &L,
) -> Result<SweepResult>
where
    R: Rng + ?Sized,
    L: JointLogLikelihood + ?Sized,
{
    let samplers = prepare(n_draws, bounds, loglike)?;
    log::debug!("sweep: {} draws over {} parameters", n_draws, samplers.len());

    let mut points = Vec::with_capacity(n_draws);
    for _ in 0..n_draws {
        let params = draw_point(&samplers, rng);
        let score = loglike.loglike(&params)?;
        points.push(SweepPoint { params, score });
    }
    Ok(finish(bounds.names(), points))
}

/// Sequential sweep from `StdRng::seed_from_u64(seed)`.
pub fn sweep_seeded<L>(
    n_draws: usize,
    bounds: &ParameterBounds,
    loglike: &L,
    seed: u64,
) -> Result<SweepResult>
where
    L: JointLogLikelihood + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(seed);
    sweep(&mut rng, n_draws, bounds, loglike)
}

/// Rayon-parallel sweep. Draw `i` uses its own RNG derived from `(seed, i)`.
///
/// Output is in draw order and bit-identical for a given seed regardless of
/// the size of the thread pool.
pub fn sweep_parallel<L>(
    n_draws: usize,
    bounds: &ParameterBounds,
    loglike: &L,
    seed: u64,
) -> Result<SweepResult>
where
    L: JointLogLikelihood + ?Sized,
{
    let samplers = prepare(n_draws, bounds, loglike)?;
    log::debug!(
        "sweep_parallel: {} draws over {} parameters ({} threads)",
        n_draws,
        samplers.len(),
        rayon::current_num_threads()
    );

    let points: Vec<SweepPoint> = (0..n_draws)
        .into_par_iter()
        .map(|i| {
            let mut rng = draw_rng(seed, i as u64);
            let params = draw_point(&samplers, &mut rng);
            let score = loglike.loglike(&params)?;
            Ok(SweepPoint { params, score })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(finish(bounds.names(), points))
}

/// Adapter turning a closure into a [`JointLogLikelihood`].
///
/// Handy for ad-hoc surfaces; the closure captures whatever fixed data it
/// scores against.
pub struct FnLikelihood<F> {
    names: Vec<String>,
    f: F,
}

impl<F> FnLikelihood<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    /// Wrap `f`, which receives parameters ordered as `names`.
    pub fn new(names: Vec<String>, f: F) -> Self {
        Self { names, f }
    }
}

impl<F> JointLogLikelihood for FnLikelihood<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    fn parameter_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn loglike(&self, params: &[f64]) -> Result<f64> {
        bg_core::traits::check_dim(params, self.names.len())?;
        (self.f)(params)
    }
}
