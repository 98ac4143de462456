//! Logistic distribution.

use std::f64::consts::PI;

use spei_stats::mean;

use super::{check_sample, finite_estimates};
use crate::dist::ContinuousDist;
use crate::error::DistError;

/// Logistic distribution, parameters `[loc, scale]`.
///
/// Method of moments: `loc` is the mean and `scale = sd * sqrt(3) / pi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logistic;

impl ContinuousDist for Logistic {
    fn name(&self) -> &'static str {
        "logistic"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["loc", "scale"]
    }

    fn fit(&self, sample: &[f64], scale_hint: f64) -> Result<Vec<f64>, DistError> {
        check_sample(self.name(), sample, scale_hint, 2)?;
        let scale = scale_hint * 3f64.sqrt() / PI;
        finite_estimates(self.name(), self.param_names(), vec![mean(sample), scale])
    }

    fn cdf(&self, x: f64, params: &[f64]) -> f64 {
        let z = (x - params[0]) / params[1];
        1.0 / (1.0 + (-z).exp())
    }
}
