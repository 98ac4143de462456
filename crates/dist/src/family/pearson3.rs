//! Pearson type III distribution.

use spei_stats::{mean, skewness};
use statrs::distribution::{ContinuousCDF, Gamma as StatrsGamma};

use super::{check_sample, finite_estimates, std_normal_cdf};
use crate::dist::ContinuousDist;
use crate::error::DistError;

/// Below this absolute skew the distribution is treated as normal.
const NORMAL_SKEW: f64 = 1.6e-5;

/// Pearson type III distribution, parameters `[skew, loc, scale]`.
///
/// `loc` and `scale` are the mean and standard deviation, so the fit is the
/// sample mean, standard deviation and skewness.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pearson3;

impl ContinuousDist for Pearson3 {
    fn name(&self) -> &'static str {
        "pearson3"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["skew", "loc", "scale"]
    }

    fn fit(&self, sample: &[f64], scale_hint: f64) -> Result<Vec<f64>, DistError> {
        check_sample(self.name(), sample, scale_hint, 3)?;
        let skew = skewness(sample).ok_or(DistError::NonFiniteEstimate {
            dist: self.name(),
            param: "skew",
        })?;
        finite_estimates(
            self.name(),
            self.param_names(),
            vec![skew, mean(sample), scale_hint],
        )
    }

    fn cdf(&self, x: f64, params: &[f64]) -> f64 {
        let skew = params[0];
        let z = (x - params[1]) / params[2];
        if skew.abs() < NORMAL_SKEW {
            return std_normal_cdf(z);
        }
        let alpha = 4.0 / (skew * skew);
        let t = 2.0 / skew * (z + 2.0 / skew);
        let Ok(g) = StatrsGamma::new(alpha, 1.0) else {
            return f64::NAN;
        };
        if skew > 0.0 { g.cdf(t) } else { g.sf(t) }
    }
}
