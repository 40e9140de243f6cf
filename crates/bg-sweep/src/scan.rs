//! One-dimensional grid scans of a joint log-likelihood.
//!
//! Holds every parameter at `base` except one, which is stepped across an
//! inclusive linear grid. Useful for slicing the surface a sweep samples.

use bg_core::{Error, JointLogLikelihood, Result, ScanPoint};

/// `points` evenly spaced values from `start` to `stop`, both inclusive.
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (points - 1) as f64;
            (0..points)
                .map(|i| if i + 1 == points { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Scan parameter `index` over `[start, stop]` with `points` grid values.
///
/// # Errors
/// `Validation` if `points < 2`, the range is not finite with `start < stop`,
/// `base` has the wrong length, or `index` is out of range. Errors from
/// `loglike` propagate unchanged.
pub fn scan<L>(
    loglike: &L,
    base: &[f64],
    index: usize,
    start: f64,
    stop: f64,
    points: usize,
) -> Result<Vec<ScanPoint>>
where
    L: JointLogLikelihood + ?Sized,
{
    if points < 2 {
        return Err(Error::Validation(format!("scan needs at least 2 points, got {}", points)));
    }
    if !(start.is_finite() && stop.is_finite() && start < stop) {
        return Err(Error::Validation(format!(
            "scan range must be finite with start < stop, got [{}, {}]",
            start, stop
        )));
    }
    bg_core::traits::check_dim(base, loglike.dim())?;
    if index >= base.len() {
        return Err(Error::Validation(format!(
            "scan index {} out of range for {} parameters",
            index,
            base.len()
        )));
    }

    let mut params = base.to_vec();
    let mut out = Vec::with_capacity(points);
    for value in linspace(start, stop, points) {
        params[index] = value;
        out.push(ScanPoint { value, score: loglike.loglike(&params)? });
    }
    log::debug!("scan: index {} over [{}, {}] with {} points", index, start, stop, points);
    Ok(out)
}

/// Like [`scan`], resolving the parameter by name.
pub fn scan_by_name<L>(
    loglike: &L,
    base: &[f64],
    name: &str,
    start: f64,
    stop: f64,
    points: usize,
) -> Result<Vec<ScanPoint>>
where
    L: JointLogLikelihood + ?Sized,
{
    let names = loglike.parameter_names();
    let index = names.iter().position(|n| n == name).ok_or_else(|| {
        Error::Validation(format!("unknown parameter '{}', expected one of {:?}", name, names))
    })?;
    scan(loglike, base, index, start, stop, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bg_models::{CoinFlipModel, CrashCountModel, HeightModel};

    #[test]
    fn test_linspace_endpoints() {
        let g = linspace(0.0, 1.0, 5);
        assert_eq!(g, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let g = linspace(0.1, 0.7, 7);
        assert_eq!(g.len(), 7);
        assert_eq!(g[0], 0.1);
        assert_eq!(g[6], 0.7);
    }

    #[test]
    fn test_scan_peaks_near_observed_rate() {
        // Flat-ish prior, 30 heads out of 40: mode sits near 0.75.
        let data: Vec<u8> = (0..40).map(|i| (i % 4 != 0) as u8).collect();
        let lik = CoinFlipModel::new(1.0, 1.0).unwrap().with_observations(data).unwrap();
        let pts = scan(&lik, &[0.5], 0, 0.01, 0.99, 99).unwrap();
        assert_eq!(pts.len(), 99);
        let best = pts.iter().max_by(|a, b| a.score.total_cmp(&b.score)).unwrap();
        assert_relative_eq!(best.value, 0.75, epsilon = 1e-9);
    }

    #[test]
    fn test_scan_holds_other_parameters() {
        let lik = HeightModel::new(170.0, 10.0, 5.0)
            .unwrap()
            .with_measurements(vec![171.0, 169.5, 172.3])
            .unwrap();
        let pts = scan_by_name(&lik, &[170.0, 2.0], "scale", 0.5, 6.0, 12).unwrap();
        for pt in &pts {
            assert_eq!(pt.score, lik.loglike(&[170.0, pt.value]).unwrap());
        }
    }

    #[test]
    fn test_scan_keeps_neg_inf() {
        let lik = CrashCountModel::default().with_counts(vec![1, 2]);
        let pts = scan(&lik, &[1.0], 0, -1.0, 1.0, 3).unwrap();
        assert_eq!(pts[0].score, f64::NEG_INFINITY);
        assert!(pts[2].score.is_finite());
    }

    #[test]
    fn test_scan_rejects_bad_grid() {
        let lik = CrashCountModel::default().with_counts(vec![1]);
        assert!(matches!(scan(&lik, &[1.0], 0, 0.0, 1.0, 1), Err(Error::Validation(_))));
        assert!(matches!(scan(&lik, &[1.0], 0, 1.0, 1.0, 5), Err(Error::Validation(_))));
        assert!(matches!(scan(&lik, &[1.0], 1, 0.0, 1.0, 5), Err(Error::Validation(_))));
        assert!(matches!(scan(&lik, &[1.0, 2.0], 0, 0.0, 1.0, 5), Err(Error::Validation(_))));
        assert!(matches!(
            scan_by_name(&lik, &[1.0], "lambda", 0.0, 1.0, 5),
            Err(Error::Validation(_))
        ));
    }
}
