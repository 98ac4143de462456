//! Gamma distribution.

use spei_stats::{mean, skewness, trigamma};
use statrs::distribution::{ContinuousCDF, Gamma as StatrsGamma};
use statrs::function::gamma::digamma;

use super::{check_sample, finite_estimates};
use crate::dist::{ContinuousDist, check_params};
use crate::error::DistError;

const MAX_ITER: usize = 100;

/// Skewness floor for the moment fit, capping the shape at `4 / 0.02^2 = 1e4`.
pub(super) const MIN_SKEW: f64 = 0.02;

/// Gamma distribution, parameters `[a, loc, scale]`.
///
/// Strictly positive samples are fitted by maximum likelihood with
/// `loc = 0`. Samples reaching zero or below are fitted by the method of
/// moments including skewness, with a free `loc` below the sample. Skewness
/// under 0.02 (including left skew) is raised to 0.02, which gives a
/// nearly normal fit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gamma;

/// Solves `ln a - psi(a) = s` for the MLE shape (Minka's start, then Newton).
fn mle_shape(s: f64) -> f64 {
    let mut a = (3.0 - s + ((s - 3.0).powi(2) + 24.0 * s).sqrt()) / (12.0 * s);
    for _ in 0..MAX_ITER {
        let f = a.ln() - digamma(a) - s;
        let df = 1.0 / a - trigamma(a);
        let mut next = a - f / df;
        if next <= 0.0 {
            next = a / 2.0;
        }
        if (next - a).abs() <= 1e-12 * a {
            return next;
        }
        a = next;
    }
    a
}

impl ContinuousDist for Gamma {
    fn name(&self) -> &'static str {
        "gamma"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["a", "loc", "scale"]
    }

    fn fit(&self, sample: &[f64], scale_hint: f64) -> Result<Vec<f64>, DistError> {
        check_sample(self.name(), sample, scale_hint, 3)?;
        let m = mean(sample);

        let params = if sample.iter().all(|&x| x > 0.0) {
            let logs: Vec<f64> = sample.iter().map(|x| x.ln()).collect();
            let s = m.ln() - mean(&logs);
            let a = mle_shape(s);
            vec![a, 0.0, m / a]
        } else {
            let skew = skewness(sample).unwrap_or(0.0).max(MIN_SKEW);
            let a = 4.0 / (skew * skew);
            let scale = scale_hint * skew / 2.0;
            vec![a, m - a * scale, scale]
        };
        finite_estimates(self.name(), self.param_names(), params)
    }

    fn validate_params(&self, params: &[f64]) -> Result<(), DistError> {
        check_params(self, params)?;
        if params[0] <= 0.0 {
            return Err(DistError::InvalidParams {
                dist: self.name(),
                reason: format!("a must be > 0, got {}", params[0]),
            });
        }
        Ok(())
    }

    fn cdf(&self, x: f64, params: &[f64]) -> f64 {
        let z = (x - params[1]) / params[2];
        StatrsGamma::new(params[0], 1.0).map_or(f64::NAN, |g| g.cdf(z))
    }
}
