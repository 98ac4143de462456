//! Normal distribution.

use spei_stats::mean;

use super::{check_sample, finite_estimates, std_normal_cdf};
use crate::dist::ContinuousDist;
use crate::error::DistError;

/// Normal distribution, parameters `[loc, scale]`.
///
/// Fitted by maximum likelihood: sample mean and population standard
/// deviation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Norm;

impl ContinuousDist for Norm {
    fn name(&self) -> &'static str {
        "norm"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["loc", "scale"]
    }

    fn fit(&self, sample: &[f64], scale_hint: f64) -> Result<Vec<f64>, DistError> {
        check_sample(self.name(), sample, scale_hint, 2)?;
        finite_estimates(self.name(), self.param_names(), vec![mean(sample), scale_hint])
    }

    fn cdf(&self, x: f64, params: &[f64]) -> f64 {
        std_normal_cdf((x - params[0]) / params[1])
    }
}
