//! The built-in distribution families and their registry.

mod fisk;
mod gamma;
mod genextreme;
mod genlogistic;
mod logistic;
mod lognorm;
mod normal;
mod pearson3;

pub use fisk::Fisk;
pub use gamma::Gamma;
pub use genextreme::GenExtreme;
pub use genlogistic::GenLogistic;
pub use logistic::Logistic;
pub use lognorm::LogNorm;
pub use normal::Norm;
pub use pearson3::Pearson3;

use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

use crate::dist::ContinuousDist;
use crate::error::DistError;

/// Candidates evaluated by [`dists_test`](crate::dists_test) when no list
/// is given.
pub const DEFAULT_DISTRIBUTIONS: &[&dyn ContinuousDist] = &[
    &Norm,
    &Gamma,
    &GenExtreme,
    &Pearson3,
    &Fisk,
    &LogNorm,
    &Logistic,
    &GenLogistic,
];

/// Looks up a built-in family by its scipy name.
pub fn by_name(name: &str) -> Option<&'static dyn ContinuousDist> {
    DEFAULT_DISTRIBUTIONS
        .iter()
        .copied()
        .find(|d| d.name() == name)
}

/// Common input checks for every estimator.
pub(crate) fn check_sample(
    dist: &'static str,
    sample: &[f64],
    scale_hint: f64,
    needed: usize,
) -> Result<(), DistError> {
    if sample.len() < needed {
        return Err(DistError::TooFewObservations {
            dist,
            needed,
            got: sample.len(),
        });
    }
    if let Some((position, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(DistError::NonFiniteSample { position, value });
    }
    if !scale_hint.is_finite() || scale_hint <= 0.0 {
        return Err(DistError::InvalidScaleHint { hint: scale_hint });
    }
    Ok(())
}

/// Rejects estimates containing NaN or infinities.
pub(crate) fn finite_estimates(
    dist: &'static str,
    names: &'static [&'static str],
    params: Vec<f64>,
) -> Result<Vec<f64>, DistError> {
    match names.iter().zip(&params).find(|(_, v)| !v.is_finite()) {
        Some((&param, _)) => Err(DistError::NonFiniteEstimate { dist, param }),
        None => Ok(params),
    }
}

/// Standard normal CDF.
pub(crate) fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}
